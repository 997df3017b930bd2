//! Static tables that drive the heuristic analyzer.
//!
//! Everything the scorer reacts to lives here: skill vocabularies, per-company
//! technology and advice, score weights, and band thresholds. Tests enumerate
//! these tables directly, so keep them as plain data.

/// A technical skill: `term` is what we look for in lower-cased resume text,
/// `display` is how it is shown back to the user.
///
/// Skills whose name is also an everyday English word ("go", "spring") are
/// `proper`: they only match their capitalized `display` form in the original
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub term: &'static str,
    pub display: &'static str,
    pub proper: bool,
}

const fn skill(term: &'static str, display: &'static str) -> Skill {
    Skill {
        term,
        display,
        proper: false,
    }
}

const fn proper(term: &'static str, display: &'static str) -> Skill {
    Skill {
        term,
        display,
        proper: true,
    }
}

pub const TECH_SKILLS: &[Skill] = &[
    // Languages
    skill("python", "Python"),
    skill("java", "Java"),
    skill("javascript", "JavaScript"),
    skill("typescript", "TypeScript"),
    skill("c++", "C++"),
    skill("c#", "C#"),
    skill("ruby", "Ruby"),
    proper("go", "Go"),
    proper("rust", "Rust"),
    skill("php", "PHP"),
    proper("swift", "Swift"),
    skill("kotlin", "Kotlin"),
    // Frameworks
    proper("react", "React"),
    skill("angular", "Angular"),
    skill("vue", "Vue"),
    skill("node", "Node.js"),
    proper("express", "Express"),
    skill("django", "Django"),
    skill("flask", "Flask"),
    skill("fastapi", "FastAPI"),
    proper("spring", "Spring"),
    skill("flutter", "Flutter"),
    // Data stores
    skill("sql", "SQL"),
    skill("mysql", "MySQL"),
    skill("postgresql", "PostgreSQL"),
    skill("mongodb", "MongoDB"),
    skill("redis", "Redis"),
    skill("elasticsearch", "Elasticsearch"),
    // Cloud and infrastructure
    skill("aws", "AWS"),
    skill("azure", "Azure"),
    skill("gcp", "GCP"),
    skill("docker", "Docker"),
    skill("kubernetes", "Kubernetes"),
    skill("jenkins", "Jenkins"),
    skill("ci/cd", "CI/CD"),
    skill("git", "Git"),
    skill("kafka", "Kafka"),
    skill("rabbitmq", "RabbitMQ"),
    skill("microservices", "Microservices"),
    skill("rest api", "REST API"),
    skill("graphql", "GraphQL"),
    // Data and ML
    skill("machine learning", "Machine Learning"),
    skill("deep learning", "Deep Learning"),
    skill("ai", "AI"),
    skill("data science", "Data Science"),
    skill("tensorflow", "TensorFlow"),
    skill("pytorch", "PyTorch"),
    skill("pandas", "Pandas"),
    skill("numpy", "NumPy"),
    skill("scikit-learn", "scikit-learn"),
    // Practices
    skill("agile", "Agile"),
    skill("scrum", "Scrum"),
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "team",
    "communication",
    "problem solving",
    "analytical",
    "collaboration",
    "management",
    "mentoring",
];

/// Technologies each well-known company is associated with, keyed by the
/// normalized company name (see `scorer::company_key`).
pub const COMPANY_TECH: &[(&str, &[&str])] = &[
    ("microsoft", &["Azure", "C#", ".NET", "TypeScript", "React"]),
    ("google", &["Go", "Python", "Kubernetes", "TensorFlow", "Angular"]),
    ("amazon", &["AWS", "Java", "Python", "DynamoDB", "Lambda"]),
    ("meta", &["React", "Python", "GraphQL", "PyTorch", "PHP"]),
    ("apple", &["Swift", "Objective-C", "iOS", "macOS", "Metal"]),
    ("netflix", &["Java", "Spring", "AWS", "Kafka", "Microservices"]),
];

/// Used for companies missing from `COMPANY_TECH`.
pub const FALLBACK_TECH: &[&str] = &["cloud computing", "modern frameworks", "scalable systems"];

/// Companies whose hiring loops weigh public code samples.
pub const CODE_SAMPLE_COMPANIES: &[&str] = &["google", "microsoft", "amazon", "meta"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceTemplate {
    pub point: &'static str,
    pub reason: &'static str,
}

const fn advice(point: &'static str, reason: &'static str) -> AdviceTemplate {
    AdviceTemplate { point, reason }
}

pub const COMPANY_ADVICE: &[(&str, &[AdviceTemplate])] = &[
    (
        "google",
        &[
            advice(
                "Highlight data structures, algorithms, and system design knowledge",
                "Google's interviews heavily focus on coding fundamentals and scalable system architecture.",
            ),
            advice(
                "Mention any experience with large-scale systems or distributed computing",
                "Google operates at massive scale - showing you understand scalability challenges is crucial.",
            ),
        ],
    ),
    (
        "microsoft",
        &[
            advice(
                "Emphasize experience with Azure, .NET, or enterprise software development",
                "Microsoft's ecosystem centers around Azure cloud and enterprise solutions.",
            ),
            advice(
                "Showcase collaborative projects or open-source contributions",
                "Microsoft values teamwork and community involvement, especially in open-source projects.",
            ),
        ],
    ),
    (
        "amazon",
        &[
            advice(
                "Demonstrate customer obsession - show how your work impacted end users",
                "Amazon's first Leadership Principle is Customer Obsession. They want to see user-focused results.",
            ),
            advice(
                "Include examples of ownership and diving deep into technical problems",
                "Amazon values engineers who take ownership and solve problems thoroughly, not superficially.",
            ),
        ],
    ),
    (
        "meta",
        &[
            advice(
                "Highlight mobile development, React, or social platform experience",
                "Meta focuses on social technologies and mobile-first development.",
            ),
            advice(
                "Show examples of fast-paced development and iteration",
                "Meta moves fast - they value engineers who can build and iterate quickly.",
            ),
        ],
    ),
    (
        "apple",
        &[
            advice(
                "Call out attention to detail, polish, and user experience in what you shipped",
                "Apple hires for craftsmanship - product quality is non-negotiable.",
            ),
            advice(
                "Mention native platform work (Swift, iOS, macOS) or performance tuning",
                "Apple's teams build close to the hardware and expect efficient, native code.",
            ),
        ],
    ),
    (
        "netflix",
        &[
            advice(
                "Show independent judgment - decisions you owned end to end",
                "Netflix's culture of freedom and responsibility favors engineers who act without hand-holding.",
            ),
            advice(
                "Highlight reliability and resilience work on distributed services",
                "Netflix streams to hundreds of millions of members and invests heavily in fault tolerance.",
            ),
        ],
    ),
];

/// Padding for keyword suggestions when the company and resume give fewer than
/// `MAX_KEYWORDS` distinct terms.
pub const GENERIC_KEYWORDS: &[&str] = &[
    "Problem Solving",
    "Team Collaboration",
    "Leadership",
    "Communication",
    "Agile",
    "CI/CD",
];

pub const FORMATTING_TIPS: &[&str] = &[
    "Keep to 1 page if <3 years experience, 2 pages max",
    "Use consistent MM/YYYY date format throughout",
    "Font: 10-12pt for body text, 14-16pt for your name",
    "Use bold section headers and consistent bullet point style",
    "Leave 0.5-1 inch margins on all sides for readability",
];

pub const SCORE_MIN: i32 = 35;
pub const SCORE_MAX: i32 = 88;

/// Variation is `(hash % VARIATION_SPAN) - VARIATION_OFFSET`, i.e. -7..=7.
pub const VARIATION_SPAN: u64 = 15;
pub const VARIATION_OFFSET: i32 = 7;

pub const MAX_IMPROVEMENTS: usize = 4;
pub const MAX_KEYWORDS: usize = 6;

/// Skill count at which breadth is praised instead of flagged.
pub const SKILL_BREADTH_THRESHOLD: usize = 8;
pub const CONTENT_DEPTH_WORDS: usize = 300;

/// Point values for each scoring bucket. Step tables award `points` once the
/// measured quantity reaches (`>=`) or exceeds (`>`) the threshold, as noted.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub base: i32,
    pub email_and_phone: i32,
    pub linkedin: i32,
    pub github: i32,
    pub portfolio: i32,
    /// (min skills, points), `>=`
    pub skill_steps: &'static [(usize, i32)],
    /// (min soft skills, points), `>=`
    pub soft_skill_steps: &'static [(usize, i32)],
    pub education: i32,
    pub cgpa_present: i32,
    /// (min cgpa, points), `>=`
    pub cgpa_steps: &'static [(f64, i32)],
    pub honors: i32,
    pub experience: i32,
    pub projects: i32,
    pub achievements: i32,
    pub metrics: i32,
    pub action_verbs: i32,
    pub structure: i32,
    pub bullets: i32,
    /// (words, points), `>`
    pub length_steps: &'static [(usize, i32)],
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    base: 34,
    email_and_phone: 4,
    linkedin: 2,
    github: 2,
    portfolio: 2,
    skill_steps: &[(3, 3), (6, 4), (10, 4), (15, 3)],
    soft_skill_steps: &[(1, 2), (3, 2)],
    education: 3,
    cgpa_present: 1,
    cgpa_steps: &[(8.0, 2), (9.0, 2)],
    honors: 2,
    experience: 3,
    projects: 2,
    achievements: 3,
    metrics: 4,
    action_verbs: 2,
    structure: 2,
    bullets: 1,
    length_steps: &[(150, 2), (300, 3), (500, 2)],
};

/// The four summary bands of `overall_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Outstanding,
    Competitive,
    Developing,
    Foundational,
}

impl ScoreBand {
    pub const OUTSTANDING_MIN: u32 = 80;
    pub const COMPETITIVE_MIN: u32 = 62;
    pub const DEVELOPING_MIN: u32 = 48;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::OUTSTANDING_MIN {
            ScoreBand::Outstanding
        } else if score >= Self::COMPETITIVE_MIN {
            ScoreBand::Competitive
        } else if score >= Self::DEVELOPING_MIN {
            ScoreBand::Developing
        } else {
            ScoreBand::Foundational
        }
    }
}

pub fn company_tech(key: &str) -> Option<&'static [&'static str]> {
    COMPANY_TECH
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, tech)| *tech)
}

pub fn company_advice(key: &str) -> Option<&'static [AdviceTemplate]> {
    COMPANY_ADVICE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, advice)| *advice)
}
