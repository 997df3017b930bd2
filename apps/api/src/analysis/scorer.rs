//! Heuristic resume-to-company fit scorer.
//!
//! `score` is a pure function of the resume text and company profile. Every
//! point in the result traces back to a signal in `FeatureSignals` and a weight
//! in `catalog::WEIGHTS`. A text hash adds a bounded, reproducible variation
//! and orders the improvement and keyword pools, so different resumes get
//! different reports while the same resume always gets the same one.

use std::collections::HashSet;

use crate::analysis::catalog::{
    self, ScoreBand, CODE_SAMPLE_COMPANIES, CONTENT_DEPTH_WORDS, FALLBACK_TECH, FORMATTING_TIPS,
    GENERIC_KEYWORDS, MAX_IMPROVEMENTS, MAX_KEYWORDS, SCORE_MAX, SCORE_MIN,
    SKILL_BREADTH_THRESHOLD, VARIATION_OFFSET, VARIATION_SPAN, WEIGHTS,
};
use crate::analysis::models::{AnalysisResult, CompanyPoint, Improvement, Priority, ResumeDetails};
use crate::analysis::signals::{text_hash, FeatureSignals};
use crate::models::company::CompanyProfile;

// ────────────────────────────────────────────────────────────────────────────
// Score composition
// ────────────────────────────────────────────────────────────────────────────

/// Points contributed by each scoring bucket, before clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub contact: i32,
    pub technical_skills: i32,
    pub soft_skills: i32,
    pub education: i32,
    pub experience: i32,
    pub formatting: i32,
    pub content_length: i32,
    pub variation: i32,
}

impl ScoreBreakdown {
    pub fn compute(signals: &FeatureSignals, hash: u64) -> Self {
        let w = &WEIGHTS;

        let mut contact = 0;
        if signals.has_email && signals.has_phone {
            contact += w.email_and_phone;
        }
        if signals.has_linkedin {
            contact += w.linkedin;
        }
        if signals.has_github {
            contact += w.github;
        }
        if signals.has_portfolio {
            contact += w.portfolio;
        }

        let mut education = 0;
        if signals.has_education {
            education += w.education;
        }
        if let Some(cgpa) = signals.cgpa {
            education += w.cgpa_present;
            education += w
                .cgpa_steps
                .iter()
                .filter(|(min, _)| cgpa >= *min)
                .map(|(_, points)| points)
                .sum::<i32>();
        }
        if signals.has_honors {
            education += w.honors;
        }

        let experience = [
            (signals.has_experience, w.experience),
            (signals.has_projects, w.projects),
            (signals.has_achievements, w.achievements),
            (signals.has_metrics, w.metrics),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum::<i32>();

        let formatting = [
            (signals.has_action_verbs, w.action_verbs),
            (signals.has_structure, w.structure),
            (signals.has_bullets, w.bullets),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum::<i32>();

        let content_length = w
            .length_steps
            .iter()
            .filter(|(words, _)| signals.word_count > *words)
            .map(|(_, points)| points)
            .sum::<i32>();

        ScoreBreakdown {
            base: w.base,
            contact,
            technical_skills: technical_skills_points(signals.skill_count()),
            soft_skills: step_points(w.soft_skill_steps, signals.found_soft_skills.len()),
            education,
            experience,
            formatting,
            content_length,
            variation: variation(hash),
        }
    }

    pub fn total(&self) -> i32 {
        self.base
            + self.contact
            + self.technical_skills
            + self.soft_skills
            + self.education
            + self.experience
            + self.formatting
            + self.content_length
            + self.variation
    }

    /// Final score, clamped to `[SCORE_MIN, SCORE_MAX]`.
    pub fn overall(&self) -> u32 {
        self.total().clamp(SCORE_MIN, SCORE_MAX) as u32
    }
}

/// Step credit for technical skills. Non-decreasing in `count`.
pub fn technical_skills_points(count: usize) -> i32 {
    step_points(WEIGHTS.skill_steps, count)
}

fn step_points(steps: &[(usize, i32)], count: usize) -> i32 {
    steps
        .iter()
        .filter(|(min, _)| count >= *min)
        .map(|(_, points)| points)
        .sum()
}

/// Reproducible offset in `-VARIATION_OFFSET..=VARIATION_OFFSET`.
pub fn variation(hash: u64) -> i32 {
    (hash % VARIATION_SPAN) as i32 - VARIATION_OFFSET
}

/// Hash-mixed sort key: the resume hash combined with the first character of
/// a pool item.
fn mixed_key(hash: u64, label: &str) -> u64 {
    let first = label.chars().next().map(|c| c as u64).unwrap_or(0);
    hash.wrapping_add(first) % 100
}

// ────────────────────────────────────────────────────────────────────────────
// Company lookup
// ────────────────────────────────────────────────────────────────────────────

/// Normalized lookup key: the first word of the name, lower-cased, letters and
/// digits only. "Amazon Web Services" and "amazon" both become "amazon".
pub fn company_key(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

struct CompanyContext<'a> {
    name: &'a str,
    industry: &'a str,
    key: String,
    tech: &'static [&'static str],
    known: bool,
}

impl<'a> CompanyContext<'a> {
    fn resolve(company: &'a CompanyProfile) -> Self {
        let key = company_key(&company.name);
        let tech = catalog::company_tech(&key);
        CompanyContext {
            name: company.name.trim(),
            industry: company.industry.trim(),
            known: tech.is_some(),
            tech: tech.unwrap_or(FALLBACK_TECH),
            key,
        }
    }

    fn tech_pair(&self, sep: &str) -> String {
        self.tech.iter().take(2).copied().collect::<Vec<_>>().join(sep)
    }

    fn wants_code_samples(&self) -> bool {
        CODE_SAMPLE_COMPANIES.contains(&self.key.as_str())
            || self.industry.to_lowercase().contains("tech")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against a company.
///
/// # Panics
///
/// Panics if `resume_text` is empty. Callers reject short uploads before
/// getting here, so an empty string is a bug in the caller.
pub fn score(resume_text: &str, company: &CompanyProfile) -> AnalysisResult {
    assert!(!resume_text.is_empty(), "resume text must not be empty");

    let hash = text_hash(resume_text);
    let signals = FeatureSignals::detect(resume_text);
    let overall_score = ScoreBreakdown::compute(&signals, hash).overall();
    let ctx = CompanyContext::resolve(company);

    AnalysisResult {
        overall_score,
        strengths: build_strengths(&signals, &ctx),
        improvements: build_improvements(&signals, &ctx, hash),
        company_specific: build_company_points(&ctx),
        keyword_suggestions: build_keywords(&signals, &ctx, hash),
        formatting_tips: FORMATTING_TIPS.iter().map(|t| t.to_string()).collect(),
        summary_recommendation: build_summary(overall_score, &signals, &ctx),
        resume_details: ResumeDetails {
            cgpa: signals.cgpa_display(),
            degree: signals.degree.clone(),
            institution: signals.institution.clone(),
            skill_count: signals.skill_count(),
            has_linked_in: signals.has_linkedin,
            has_github: signals.has_github,
            has_metrics: signals.has_metrics,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report sections
// ────────────────────────────────────────────────────────────────────────────

fn build_strengths(signals: &FeatureSignals, ctx: &CompanyContext) -> Vec<String> {
    let name = ctx.name;
    let mut strengths = Vec::new();

    if signals.has_email && signals.has_phone && signals.has_profile_link() {
        let profiles: Vec<&str> = [
            (signals.has_linkedin, "LinkedIn"),
            (signals.has_github, "GitHub"),
            (signals.has_portfolio, "portfolio"),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, label)| *label)
        .collect();
        strengths.push(format!(
            "Excellent! You've included email, phone, and {} - making it easy for {name} recruiters to reach and research you.",
            profiles.join(" + ")
        ));
    }

    if signals.skill_count() >= SKILL_BREADTH_THRESHOLD {
        let matched: Vec<&str> = signals
            .found_skills
            .iter()
            .filter(|s| ctx.tech.iter().any(|t| t.eq_ignore_ascii_case(s.term)))
            .map(|s| s.display)
            .collect();
        if matched.is_empty() {
            strengths.push(format!(
                "Impressive technical breadth with {} skills listed! You're showing versatility, which {name} values. Consider also adding their key tech: {}.",
                signals.skill_count(),
                ctx.tech_pair(" and ")
            ));
        } else {
            let shown = matched.iter().take(3).copied().collect::<Vec<_>>().join(", ");
            let more = if matched.len() > 3 {
                format!(" and {} more", matched.len() - 3)
            } else {
                String::new()
            };
            strengths.push(format!(
                "Perfect alignment! You've highlighted {shown}{more} - these are core technologies {name} uses daily."
            ));
        }
    }

    if signals.has_metrics && signals.has_achievements {
        strengths.push(format!(
            "You're quantifying your impact with real numbers. Measurable results separate good resumes from great ones, and {name} looks for them."
        ));
    }

    if signals.has_education {
        let degree = signals.degree.as_deref();
        let institution = signals.institution.as_deref();
        match signals.cgpa {
            Some(cgpa) if cgpa >= 9.0 => strengths.push(format!(
                "Your {cgpa:.2} CGPA is outstanding{}! This demonstrates academic excellence that {name} highly values.",
                degree.map(|d| format!(" in {d}")).unwrap_or_default()
            )),
            Some(cgpa) if cgpa >= 8.0 => strengths.push(format!(
                "Great academic performance with {cgpa:.2} CGPA{}! This shows consistency and dedication - exactly what {name} looks for.",
                degree.map(|d| format!(" in {d}")).unwrap_or_default()
            )),
            Some(_) => strengths.push(format!(
                "Your educational background is clearly presented{}{}. {name} appreciates complete education details.",
                degree.map(|d| format!(" with {d}")).unwrap_or_default(),
                institution.map(|i| format!(" from {i}")).unwrap_or_default()
            )),
            None => strengths.push(format!(
                "Clear educational background{}{}. Consider adding your GPA/CGPA if it's strong (>7.5) - {name} pays attention to academic performance.",
                degree.map(|d| format!(": {d}")).unwrap_or_default(),
                institution.map(|i| format!(" from {i}")).unwrap_or_default()
            )),
        }
    }

    if signals.has_experience && signals.has_projects {
        strengths.push(format!(
            "You show hands-on work through concrete experience and projects, which gives {name} interviewers something real to dig into."
        ));
    }

    if signals.found_soft_skills.len() >= 3 {
        strengths.push(format!(
            "You back your technical work with {} - {name} hires people who can work across teams.",
            signals.found_soft_skills.iter().take(3).copied().collect::<Vec<_>>().join(", ")
        ));
    }

    if strengths.is_empty() {
        strengths.push("You've got a solid starting point - let's make it shine!".to_string());
    }

    strengths
}

fn improvement(category: &str, issue: &str, suggestion: String, priority: Priority) -> Improvement {
    Improvement {
        category: category.to_string(),
        issue: issue.to_string(),
        suggestion,
        priority,
    }
}

fn build_improvements(signals: &FeatureSignals, ctx: &CompanyContext, hash: u64) -> Vec<Improvement> {
    let name = ctx.name;
    let mut pool = Vec::new();

    if !signals.has_email || !signals.has_phone {
        pool.push(improvement(
            "Contact Information",
            "Incomplete contact details",
            format!("Put a professional email and a phone number at the top. {name} recruiters move on quickly when they can't reach you."),
            Priority::High,
        ));
    }

    if signals.skill_count() < SKILL_BREADTH_THRESHOLD {
        pool.push(improvement(
            "Technical Skills",
            "Could add more relevant technologies",
            format!(
                "{name} actively uses {} in their tech stack. Add any of these you have experience with, even from personal projects or coursework!",
                ctx.tech.join(", ")
            ),
            Priority::High,
        ));
    }

    if !signals.has_linkedin {
        pool.push(improvement(
            "Professional Profile",
            "Missing LinkedIn profile",
            format!("Add your LinkedIn URL! Most {name} recruiters search candidates on LinkedIn first. Keep the profile consistent with your resume."),
            Priority::High,
        ));
    }

    if !signals.has_github && ctx.wants_code_samples() {
        pool.push(improvement(
            "Technical Portfolio",
            "No GitHub profile found",
            format!(
                "{name} likes seeing code samples! Add your GitHub URL and pin 2-3 of your best projects that use {}.",
                ctx.tech_pair(" or ")
            ),
            Priority::Medium,
        ));
    }

    if !signals.has_metrics {
        pool.push(improvement(
            "Impact & Results",
            "Missing quantifiable achievements",
            format!("Add numbers to 2-3 bullet points: 'Reduced API response time by 40%', 'Built feature used by 5,000+ users', 'Improved test coverage from 60% to 90%'. {name} wants to see measurable impact!"),
            Priority::High,
        ));
    }

    if signals.has_education && signals.cgpa.is_none() {
        pool.push(improvement(
            "Education",
            "GPA/CGPA not mentioned",
            "If your CGPA is above 7.5 (or GPA above 3.0), add it! Academic performance matters to recruiters, especially for early-career positions.".to_string(),
            Priority::Medium,
        ));
    } else if !signals.has_education {
        pool.push(improvement(
            "Education",
            "No education section found",
            "Add your degree, institution, and graduation year. Even experienced candidates are screened on education.".to_string(),
            Priority::High,
        ));
    }

    if !signals.has_projects && signals.skill_count() < 10 {
        pool.push(improvement(
            "Projects",
            "Limited project section",
            format!(
                "Add 2-3 personal or academic projects using {}. Include what you built, the technologies used, and the results. {name} values hands-on experience!",
                ctx.tech_pair(" or ")
            ),
            Priority::High,
        ));
    }

    if !signals.has_achievements {
        pool.push(improvement(
            "Achievements",
            "No clear achievements highlighted",
            format!("Use action verbs like 'Achieved', 'Improved', 'Reduced', and 'Optimized'. Show how you made things better, not just what you did. {name} seeks problem-solvers!"),
            Priority::Medium,
        ));
    }

    if signals.word_count < CONTENT_DEPTH_WORDS {
        pool.push(improvement(
            "Content Depth",
            "Resume seems brief",
            "Expand your experience and project descriptions. Aim for 400-600 words total, covering your role, technologies used, challenges faced, and results achieved.".to_string(),
            Priority::Medium,
        ));
    }

    if !signals.has_structure {
        pool.push(improvement(
            "Structure",
            "Sections are hard to find",
            "Use clear headings such as Experience, Education, Skills, and Projects so applicant tracking systems can parse your resume.".to_string(),
            Priority::Low,
        ));
    }

    if signals.found_soft_skills.is_empty() {
        pool.push(improvement(
            "Soft Skills",
            "No collaboration or leadership signals",
            format!("Mention how you worked with others: mentoring, leading a team, or communicating with stakeholders. {name} hires for teamwork as well as code."),
            Priority::Low,
        ));
    }

    if pool.is_empty() {
        pool.push(improvement(
            "Tailoring",
            "Generic positioning",
            format!(
                "Your resume covers the fundamentals. Tailor the summary and top bullets to the {name} role you're targeting, leading with {}.",
                ctx.tech_pair(" and ")
            ),
            Priority::Low,
        ));
    }

    // Stable sort: ties keep pool order, so equal keys stay deterministic.
    pool.sort_by(|a, b| mixed_key(hash, &b.category).cmp(&mixed_key(hash, &a.category)));
    pool.truncate(MAX_IMPROVEMENTS);
    pool
}

fn build_company_points(ctx: &CompanyContext) -> Vec<CompanyPoint> {
    if let Some(advice) = catalog::company_advice(&ctx.key) {
        return advice
            .iter()
            .map(|a| CompanyPoint {
                point: a.point.to_string(),
                reason: a.reason.to_string(),
            })
            .collect();
    }

    let name = ctx.name;
    let industry = if ctx.industry.is_empty() {
        "their domain"
    } else {
        ctx.industry
    };
    vec![
        CompanyPoint {
            point: format!("Research {name}'s tech stack and align your skills"),
            reason: format!(
                "{name} values candidates familiar with {}.",
                ctx.tech_pair(" and ")
            ),
        },
        CompanyPoint {
            point: format!("Mention projects related to {industry}"),
            reason: format!(
                "Domain knowledge in {industry} reduces onboarding time and shows genuine interest in {name}."
            ),
        },
    ]
}

fn build_keywords(signals: &FeatureSignals, ctx: &CompanyContext, hash: u64) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool: Vec<String> = ctx
        .tech
        .iter()
        .copied()
        .chain(signals.found_skills.iter().map(|s| s.display))
        .filter(|k| seen.insert(k.to_lowercase()))
        .map(str::to_string)
        .collect();

    if pool.len() < MAX_KEYWORDS {
        for generic in GENERIC_KEYWORDS {
            if pool.len() >= MAX_KEYWORDS {
                break;
            }
            if seen.insert(generic.to_lowercase()) {
                pool.push(generic.to_string());
            }
        }
    }

    pool.sort_by_key(|k| mixed_key(hash, k));
    pool.truncate(MAX_KEYWORDS);
    pool
}

fn build_summary(score: u32, signals: &FeatureSignals, ctx: &CompanyContext) -> String {
    let name = ctx.name;
    let detected = signals
        .found_skills
        .iter()
        .take(3)
        .map(|s| s.display)
        .collect::<Vec<_>>()
        .join(", ");

    match ScoreBand::from_score(score) {
        ScoreBand::Outstanding => {
            let backing = match signals.cgpa {
                Some(cgpa) if cgpa >= 9.0 => "Your strong CGPA and experience show",
                _ => "Your experience and skills show",
            };
            format!(
                "You're in excellent shape for {name}! {backing} you're ready. Polish those metrics and you'll be interview-ready."
            )
        }
        ScoreBand::Competitive => {
            let base = if detected.is_empty() {
                format!("Solid foundation for {name}!")
            } else {
                format!("Solid foundation for {name} - your {detected} background is a good base.")
            };
            let metrics = if signals.has_metrics {
                "keep leading with quantified results"
            } else {
                "quantify your achievements with numbers"
            };
            format!(
                "{base} Focus on adding their key technologies ({}) and {metrics}.",
                ctx.tech_pair(", ")
            )
        }
        ScoreBand::Developing => {
            let cgpa_clause = match signals.cgpa {
                Some(cgpa) if cgpa >= 9.0 => " Your academic record is a real asset - keep it prominent.",
                Some(_) => "",
                None => " Include your GPA/CGPA if it's strong.",
            };
            format!(
                "You're on the right track for {name}. Deepen your experience section with concrete outcomes and work in {} where you genuinely have it.{cgpa_clause}",
                ctx.tech_pair(" and ")
            )
        }
        ScoreBand::Foundational => {
            let closing = if signals.cgpa.is_none() {
                "include your GPA/CGPA if strong"
            } else {
                "highlight your achievements"
            };
            let industry_note = if !ctx.known && !ctx.industry.is_empty() {
                format!(" Show some familiarity with {}.", ctx.industry)
            } else {
                String::new()
            };
            format!(
                "Good starting point! Add more technical skills (especially {}), quantify your impact with metrics, and {closing}.{industry_note}",
                ctx.tech.first().copied().unwrap_or("modern frameworks")
            )
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const AMAZON_RESUME: &str = "John Doe john@doe.com 555-123-4567 linkedin.com/in/johndoe github.com/johndoe. B.Tech Computer Science, CGPA: 8.7. Skills: Python, React, AWS, Docker, Kubernetes, SQL. Reduced API latency by 40% serving 10,000 users. Built 3 projects.";

    const FULL_RESUME: &str = "\
Priya Sharma
priya.sharma@example.com | +1 (555) 201-7788 | linkedin.com/in/priyasharma | github.com/priyas | Portfolio: priya.dev

SUMMARY
Backend engineer with a focus on reliable distributed services, mentoring and cross-team collaboration.

EXPERIENCE
Software Engineer, Finlytics (2021 - Present)
- Designed and built a payments ledger in Java and Spring serving 2 million users
- Reduced p99 latency by 45% by introducing Redis caching and Kafka event streams
- Led a team of 4 engineers; improved deployment frequency 3x with Jenkins CI/CD

PROJECTS
- Built a Kubernetes operator in Go for PostgreSQL failover
- Developed a machine learning fraud model with Python, Pandas and scikit-learn

SKILLS
Python, Java, Go, TypeScript, React, Node.js, SQL, PostgreSQL, MongoDB, AWS, Docker, Kubernetes, GraphQL, Microservices, Agile

EDUCATION
B.Tech in Computer Science, National Institute of Technology, CGPA: 9.2
Dean's list, merit scholarship
";

    fn company(name: &str, industry: &str) -> CompanyProfile {
        CompanyProfile::new(name, industry)
    }

    fn signals_with_skills(terms: &[&str]) -> FeatureSignals {
        let found = catalog::TECH_SKILLS
            .iter()
            .filter(|s| terms.contains(&s.term))
            .collect();
        FeatureSignals {
            found_skills: found,
            ..Default::default()
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let profile = company("Amazon", "Technology");
        let first = score(FULL_RESUME, &profile);
        let second = score(FULL_RESUME, &profile);
        assert_eq!(first, second);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.improvements, second.improvements);
        assert_eq!(first.keyword_suggestions, second.keyword_suggestions);
    }

    #[test]
    fn test_score_always_within_range() {
        let profile = company("Initech", "Software");
        let inputs = [
            "x",
            "Hello",
            "   ",
            AMAZON_RESUME,
            FULL_RESUME,
            "CGPA: 9.9 CGPA: 9.9 python java go rust aws gcp azure docker kubernetes",
            "€€€€€€€€€€€€€€€€€€€€€€",
        ];
        for input in inputs {
            let result = score(input, &profile);
            assert!(
                (35..=88).contains(&result.overall_score),
                "score {} out of range for {input:?}",
                result.overall_score
            );
        }
    }

    #[test]
    fn test_strong_resume_hits_ceiling_not_100() {
        let result = score(FULL_RESUME, &company("Google", "Technology"));
        assert!(result.overall_score >= ScoreBand::OUTSTANDING_MIN);
        assert!(result.overall_score <= 88);
    }

    #[test]
    fn test_minimal_input_produces_complete_result() {
        let result = score("Hello", &company("Amazon", "Technology"));

        assert_eq!(ScoreBand::from_score(result.overall_score), ScoreBand::Foundational);
        assert!(!result.strengths.is_empty());
        assert!(!result.improvements.is_empty());
        assert!(result.improvements.len() <= MAX_IMPROVEMENTS);
        assert!(!result.company_specific.is_empty());
        assert_eq!(result.keyword_suggestions.len(), MAX_KEYWORDS);
        assert_eq!(result.formatting_tips.len(), FORMATTING_TIPS.len());
        assert!(!result.summary_recommendation.is_empty());
        assert_eq!(result.resume_details.cgpa, None);
        assert_eq!(result.resume_details.skill_count, 0);
    }

    #[test]
    #[should_panic(expected = "resume text must not be empty")]
    fn test_empty_text_is_a_contract_violation() {
        score("", &company("Amazon", "Technology"));
    }

    #[test]
    fn test_amazon_end_to_end() {
        let result = score(AMAZON_RESUME, &company("Amazon", "Technology"));

        let band = ScoreBand::from_score(result.overall_score);
        assert!(
            matches!(band, ScoreBand::Competitive | ScoreBand::Outstanding),
            "expected upper-middle band, got {} ({band:?})",
            result.overall_score
        );
        assert_eq!(result.resume_details.cgpa.as_deref(), Some("8.70"));
        assert!(result.resume_details.has_linked_in);
        assert!(result.resume_details.has_github);
        assert!(result.resume_details.has_metrics);
        assert_eq!(result.resume_details.skill_count, 6);
        assert_eq!(
            result.resume_details.degree.as_deref(),
            Some("B.Tech Computer Science")
        );

        assert!(result.company_specific.iter().any(|p| {
            let point = p.point.to_lowercase();
            point.contains("customer obsession") || point.contains("ownership")
        }));
        assert!(!result.strengths.is_empty());
        assert!(!result.improvements.is_empty());
        assert!(result.improvements.len() <= 4);
    }

    #[test]
    fn test_amazon_breakdown_is_explainable() {
        let signals = FeatureSignals::detect(AMAZON_RESUME);
        let breakdown = ScoreBreakdown::compute(&signals, 0);
        // email+phone, LinkedIn, GitHub
        assert_eq!(breakdown.contact, 8);
        // 6 skills crosses the 3 and 6 steps
        assert_eq!(breakdown.technical_skills, 7);
        assert_eq!(breakdown.soft_skills, 0);
        // degree, CGPA present, CGPA >= 8.0
        assert_eq!(breakdown.education, 6);
        assert_eq!(breakdown.experience, 12);
        assert_eq!(breakdown.content_length, 0);
    }

    #[test]
    fn test_unknown_company_falls_back_to_generic_advice() {
        let result = score(AMAZON_RESUME, &company("Initech", "Financial Software"));

        assert_eq!(result.company_specific.len(), 2);
        assert!(result.company_specific[0].point.contains("Initech"));
        assert!(result
            .company_specific
            .iter()
            .any(|p| p.point.contains("Financial Software")));
        // generic tech list stands in for the company's stack
        assert!(result.company_specific[0].reason.contains("cloud computing"));
    }

    #[test]
    fn test_unknown_company_without_industry() {
        let result = score("Hello", &company("Initech", ""));
        assert!(result
            .company_specific
            .iter()
            .any(|p| p.point.contains("their domain")));
    }

    #[test]
    fn test_company_key_normalization() {
        assert_eq!(company_key("Amazon"), "amazon");
        assert_eq!(company_key("  Amazon Web Services "), "amazon");
        assert_eq!(company_key("Meta, Inc."), "meta");
        assert_eq!(company_key(""), "");
    }

    #[test]
    fn test_known_company_suffix_still_matches() {
        let result = score("Hello", &company("Google LLC", "Technology"));
        assert!(result.company_specific[0].reason.contains("Google"));
    }

    #[test]
    fn test_technical_skill_credit_is_monotonic() {
        let mut previous = technical_skills_points(0);
        for count in 1..=catalog::TECH_SKILLS.len() {
            let points = technical_skills_points(count);
            assert!(points >= previous, "credit dropped at {count} skills");
            previous = points;
        }
    }

    #[test]
    fn test_superset_resume_earns_at_least_subset_skill_credit() {
        let subset = signals_with_skills(&["python", "aws", "docker"]);
        let superset = signals_with_skills(&["python", "aws", "docker", "kubernetes", "sql", "react", "go"]);

        let sub = ScoreBreakdown::compute(&subset, 7);
        let sup = ScoreBreakdown::compute(&superset, 7);
        assert!(sup.technical_skills >= sub.technical_skills);
        assert!(sup.technical_skills > 0);
        // everything else held equal
        assert_eq!(sub.contact, sup.contact);
        assert_eq!(sub.education, sup.education);
        assert_eq!(sub.variation, sup.variation);
    }

    #[test]
    fn test_superset_text_never_scores_lower_on_skills() {
        let base = "Engineer. Skills: Python, AWS.";
        let richer = "Engineer. Skills: Python, AWS, Docker, Kubernetes, SQL, React, Go, Kafka, Redis, GraphQL.";
        let a = ScoreBreakdown::compute(&FeatureSignals::detect(base), 0);
        let b = ScoreBreakdown::compute(&FeatureSignals::detect(richer), 0);
        assert!(b.technical_skills >= a.technical_skills);
    }

    #[test]
    fn test_variation_bounds() {
        for hash in 0..1000u64 {
            let v = variation(hash);
            assert!((-7..=7).contains(&v));
        }
        assert_eq!(variation(7), 0);
    }

    #[test]
    fn test_variation_spreads_across_resumes() {
        let seen: HashSet<i32> = (0..200)
            .map(|i| variation(text_hash(&format!("resume number {i}"))))
            .collect();
        assert!(seen.len() >= 10, "only {} distinct variations", seen.len());
    }

    #[test]
    fn test_overall_is_clamped() {
        let low = ScoreBreakdown {
            base: 10,
            ..Default::default()
        };
        assert_eq!(low.overall(), 35);

        let high = ScoreBreakdown {
            base: 150,
            ..Default::default()
        };
        assert_eq!(high.overall(), 88);
    }

    #[test]
    fn test_improvements_ordered_by_hash_mixed_key() {
        let text = "Hello";
        let hash = text_hash(text);
        let result = score(text, &company("Amazon", "Technology"));

        let keys: Vec<u64> = result
            .improvements
            .iter()
            .map(|i| mixed_key(hash, &i.category))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]), "keys {keys:?} not descending");
    }

    #[test]
    fn test_improvement_order_varies_between_resumes() {
        let profile = company("Amazon", "Technology");
        let orders: HashSet<Vec<String>> = (1..=10)
            .map(|i| {
                score(&"x".repeat(i), &profile)
                    .improvements
                    .into_iter()
                    .map(|imp| imp.category)
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_keywords_are_deduplicated_and_capped() {
        let result = score(AMAZON_RESUME, &company("Amazon", "Technology"));
        let keywords = &result.keyword_suggestions;

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        let unique: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        assert_eq!(unique.len(), keywords.len());
        // AWS and Python appear in both the company list and the resume
        assert_eq!(keywords.iter().filter(|k| k.eq_ignore_ascii_case("aws")).count(), 1);
    }

    #[test]
    fn test_keywords_draw_from_company_and_resume() {
        let result = score(AMAZON_RESUME, &company("Amazon", "Technology"));
        let allowed: HashSet<String> = catalog::company_tech("amazon")
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .chain(["React", "Docker", "Kubernetes", "SQL"].iter().map(|s| s.to_string()))
            .collect();
        for k in &result.keyword_suggestions {
            assert!(allowed.contains(k), "unexpected keyword {k}");
        }
    }

    #[test]
    fn test_keywords_padded_with_generics_when_pool_is_small() {
        let signals = FeatureSignals::default();
        let profile = company("Initech", "");
        let ctx = CompanyContext::resolve(&profile);
        let keywords = build_keywords(&signals, &ctx, 0);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert!(keywords.iter().any(|k| GENERIC_KEYWORDS.contains(&k.as_str())));
    }

    #[test]
    fn test_contact_strength_requires_profile_link() {
        let profile = company("Amazon", "Technology");
        let without = score("reach me at a@b.io or 555-123-4567", &profile);
        assert!(!without.strengths.iter().any(|s| s.contains("recruiters to reach")));

        let with = score("reach me at a@b.io or 555-123-4567, github.com/me", &profile);
        assert!(with.strengths.iter().any(|s| s.contains("GitHub")));
    }

    #[test]
    fn test_skill_alignment_strength_names_company_tech() {
        let result = score(FULL_RESUME, &company("Netflix", "Entertainment"));
        assert!(result
            .strengths
            .iter()
            .any(|s| s.starts_with("Perfect alignment") && s.contains("Java")));
    }

    #[test]
    fn test_high_cgpa_mentioned_in_strengths() {
        let result = score(FULL_RESUME, &company("Google", "Technology"));
        assert_eq!(result.resume_details.cgpa.as_deref(), Some("9.20"));
        assert!(result.strengths.iter().any(|s| s.contains("9.20 CGPA")));
    }

    #[test]
    fn test_summary_bands() {
        let profile = company("Amazon", "Technology");
        let ctx = CompanyContext::resolve(&profile);
        let signals = FeatureSignals::default();

        assert!(build_summary(85, &signals, &ctx).starts_with("You're in excellent shape for Amazon"));
        assert!(build_summary(70, &signals, &ctx).starts_with("Solid foundation for Amazon"));
        assert!(build_summary(55, &signals, &ctx).starts_with("You're on the right track for Amazon"));
        assert!(build_summary(40, &signals, &ctx).starts_with("Good starting point"));
    }

    #[test]
    fn test_summary_mentions_cgpa_only_when_high() {
        let profile = company("Amazon", "Technology");
        let ctx = CompanyContext::resolve(&profile);

        let high = FeatureSignals {
            cgpa: Some(9.4),
            ..Default::default()
        };
        let modest = FeatureSignals {
            cgpa: Some(7.1),
            ..Default::default()
        };
        assert!(build_summary(85, &high, &ctx).contains("CGPA"));
        assert!(!build_summary(85, &modest, &ctx).contains("CGPA"));
    }

    #[test]
    fn test_summary_interpolates_detected_skills() {
        let signals = FeatureSignals::detect(AMAZON_RESUME);
        let profile = company("Amazon", "Technology");
        let ctx = CompanyContext::resolve(&profile);
        let summary = build_summary(70, &signals, &ctx);
        assert!(summary.contains("React"), "summary: {summary}");
        assert!(summary.contains("AWS, Java"));
    }

    #[test]
    fn test_fallback_improvement_when_nothing_missing() {
        let signals = FeatureSignals::detect(FULL_RESUME);
        let profile = company("Google", "Technology");
        let ctx = CompanyContext::resolve(&profile);
        let improvements = build_improvements(&signals, &ctx, text_hash(FULL_RESUME));
        assert!(!improvements.is_empty());
    }
}
