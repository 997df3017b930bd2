//! Starter company catalog, inserted at startup when `SEED_COMPANIES` is on.

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::company::JobPosting;

struct SeedCompany {
    name: &'static str,
    slug: &'static str,
    domain: &'static str,
    industry: &'static str,
    size: &'static str,
    location: &'static str,
    founded: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

struct JobTemplate {
    title: &'static str,
    department: &'static str,
    location: &'static str,
    employment_type: &'static str,
    experience: &'static str,
    salary: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
}

const TECH_JOBS: &[JobTemplate] = &[
    JobTemplate {
        title: "Software Engineer",
        department: "Engineering",
        location: "Remote/Hybrid",
        employment_type: "Full-time",
        experience: "Mid-Senior",
        salary: "$120k - $180k",
        description: "Design, build and operate services used by millions of customers.",
        requirements: &["3+ years experience", "Strong programming skills", "Bachelor's degree in CS or related field"],
    },
    JobTemplate {
        title: "Senior Data Analyst",
        department: "Data & Analytics",
        location: "On-site",
        employment_type: "Full-time",
        experience: "Senior",
        salary: "$100k - $150k",
        description: "Analyze data and provide insights that drive business decisions.",
        requirements: &["5+ years in data analysis", "SQL, Python, Tableau", "Strong analytical skills"],
    },
    JobTemplate {
        title: "Frontend Developer",
        department: "Engineering",
        location: "Remote",
        employment_type: "Full-time",
        experience: "Entry-Mid",
        salary: "$90k - $140k",
        description: "Build responsive, accessible user interfaces.",
        requirements: &["React/Vue/Angular", "2+ years experience", "UI/UX understanding"],
    },
    JobTemplate {
        title: "Software Engineering Intern",
        department: "Engineering",
        location: "On-site",
        employment_type: "Internship",
        experience: "Entry",
        salary: "$30/hour",
        description: "Summer internship program for aspiring software engineers.",
        requirements: &["Currently pursuing CS degree", "Basic programming knowledge", "Eager to learn"],
    },
];

const FINANCE_JOBS: &[JobTemplate] = &[
    JobTemplate {
        title: "Financial Analyst",
        department: "Finance",
        location: "On-site",
        employment_type: "Full-time",
        experience: "Entry-Mid",
        salary: "$80k - $120k",
        description: "Analyze financial data and prepare reports for management.",
        requirements: &["Bachelor's in Finance", "Excel proficiency", "Analytical skills"],
    },
    JobTemplate {
        title: "Risk Manager",
        department: "Risk Management",
        location: "Hybrid",
        employment_type: "Full-time",
        experience: "Senior",
        salary: "$140k - $200k",
        description: "Assess and mitigate financial risk across trading desks.",
        requirements: &["CFA/FRM preferred", "7+ years experience", "Risk modeling expertise"],
    },
];

const CONSULTING_JOBS: &[JobTemplate] = &[
    JobTemplate {
        title: "Management Consultant",
        department: "Consulting",
        location: "Travel Required",
        employment_type: "Full-time",
        experience: "Entry-Mid",
        salary: "$90k - $140k",
        description: "Advise Fortune 500 clients on strategy and operations.",
        requirements: &["Top MBA/Bachelor's", "Problem-solving skills", "Travel flexibility"],
    },
    JobTemplate {
        title: "Business Analyst",
        department: "Consulting",
        location: "Hybrid",
        employment_type: "Full-time",
        experience: "Entry",
        salary: "$70k - $100k",
        description: "Support client engagements with data analysis and research.",
        requirements: &["Bachelor's degree", "Analytical skills", "Excel/PowerPoint"],
    },
];

const COMPANIES: &[SeedCompany] = &[
    SeedCompany {
        name: "Google",
        slug: "google",
        domain: "google.com",
        industry: "Technology",
        size: "100,000+",
        location: "Mountain View, CA",
        founded: "1998",
        description: "Search, advertising and cloud computing company.",
        features: &["Competitive salary and equity packages", "20% time for personal projects", "Professional development programs"],
    },
    SeedCompany {
        name: "Amazon",
        slug: "amazon",
        domain: "amazon.com",
        industry: "E-commerce/Technology",
        size: "1,500,000+",
        location: "Seattle, WA",
        founded: "1994",
        description: "E-commerce and cloud computing company.",
        features: &["Stock options (RSUs)", "Career advancement opportunities", "Learning and development programs"],
    },
    SeedCompany {
        name: "Microsoft",
        slug: "microsoft",
        domain: "microsoft.com",
        industry: "Technology",
        size: "200,000+",
        location: "Redmond, WA",
        founded: "1975",
        description: "Software, cloud services and hardware company.",
        features: &["Comprehensive benefits", "Remote work options", "Inclusive culture"],
    },
    SeedCompany {
        name: "Apple",
        slug: "apple",
        domain: "apple.com",
        industry: "Technology",
        size: "150,000+",
        location: "Cupertino, CA",
        founded: "1976",
        description: "Consumer electronics and software company.",
        features: &["Employee product discounts", "Education reimbursement", "Innovation-driven culture"],
    },
    SeedCompany {
        name: "Meta",
        slug: "meta",
        domain: "meta.com",
        industry: "Technology",
        size: "80,000+",
        location: "Menlo Park, CA",
        founded: "2004",
        description: "Social media and metaverse technology company.",
        features: &["RSU grants", "Flexible work options", "Cutting-edge projects"],
    },
    SeedCompany {
        name: "Netflix",
        slug: "netflix",
        domain: "netflix.com",
        industry: "Entertainment/Technology",
        size: "12,000+",
        location: "Los Gatos, CA",
        founded: "1997",
        description: "Streaming entertainment service.",
        features: &["Freedom and responsibility culture", "Unlimited vacation policy", "Industry-leading salaries"],
    },
    SeedCompany {
        name: "Tesla",
        slug: "tesla",
        domain: "tesla.com",
        industry: "Automotive/Technology",
        size: "100,000+",
        location: "Austin, TX",
        founded: "2003",
        description: "Electric vehicle and clean energy company.",
        features: &["Employee vehicle purchase program", "Stock options", "Mission-driven work"],
    },
    SeedCompany {
        name: "JPMorgan Chase",
        slug: "jpmorgan",
        domain: "jpmorganchase.com",
        industry: "Finance",
        size: "250,000+",
        location: "New York, NY",
        founded: "1799",
        description: "Global financial services firm.",
        features: &["Competitive salary and bonuses", "Tuition reimbursement", "Global opportunities"],
    },
    SeedCompany {
        name: "Goldman Sachs",
        slug: "goldman-sachs",
        domain: "goldmansachs.com",
        industry: "Finance",
        size: "45,000+",
        location: "New York, NY",
        founded: "1869",
        description: "Investment banking and securities firm.",
        features: &["Performance bonuses", "Mentorship programs", "Global career paths"],
    },
    SeedCompany {
        name: "McKinsey & Company",
        slug: "mckinsey",
        domain: "mckinsey.com",
        industry: "Consulting",
        size: "35,000+",
        location: "New York, NY",
        founded: "1926",
        description: "Management consulting firm.",
        features: &["MBA sponsorship", "Global travel opportunities", "Mentorship culture"],
    },
];

/// Job templates for an industry; anything unrecognized gets the first two
/// technology roles.
fn job_templates(industry: &str) -> &'static [JobTemplate] {
    if industry.contains("Technology") {
        TECH_JOBS
    } else if industry.contains("Finance") {
        FINANCE_JOBS
    } else if industry.contains("Consulting") {
        CONSULTING_JOBS
    } else {
        &TECH_JOBS[..2]
    }
}

fn jobs_for(industry: &str) -> Vec<JobPosting> {
    job_templates(industry)
        .iter()
        .map(|t| JobPosting {
            title: t.title.to_string(),
            department: Some(t.department.to_string()),
            location: Some(t.location.to_string()),
            employment_type: Some(t.employment_type.to_string()),
            experience: Some(t.experience.to_string()),
            salary: Some(t.salary.to_string()),
            description: Some(t.description.to_string()),
            requirements: t.requirements.iter().map(|r| r.to_string()).collect(),
            posted_date: None,
        })
        .collect()
}

/// Inserts the starter catalog. Existing slugs are left untouched, so this is
/// safe to run on every startup. Returns the number of rows inserted.
pub async fn seed_companies(pool: &PgPool) -> Result<u64, AppError> {
    let mut inserted = 0;
    for company in COMPANIES {
        let features: Vec<String> = company.features.iter().map(|f| f.to_string()).collect();
        let result = sqlx::query(
            r#"
            INSERT INTO companies
                (name, slug, domain, industry, size, location, founded, description, features, jobs)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(company.name)
        .bind(company.slug)
        .bind(company.domain)
        .bind(company.industry)
        .bind(company.size)
        .bind(company.location)
        .bind(company.founded)
        .bind(company.description)
        .bind(&features)
        .bind(Json(jobs_for(company.industry)))
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }

    info!(
        inserted,
        total = COMPANIES.len(),
        "Company catalog seeded"
    );
    Ok(inserted)
}
