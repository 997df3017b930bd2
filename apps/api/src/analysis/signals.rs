//! Feature detection over extracted resume text.
//!
//! All patterns are compiled once on first use and shared read-only across
//! threads.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::catalog::{Skill, SOFT_SKILLS, TECH_SKILLS};

/// Longest degree or institution string surfaced in `resumeDetails`.
const DETAIL_MAX_CHARS: usize = 80;

/// Scales accepted for unlabelled `value / scale` grades.
const GRADE_SCALES: &[f64] = &[4.0, 5.0, 10.0, 100.0, 1000.0];

/// Section headings counted towards "structured resume".
const SECTION_HEADINGS_REQUIRED: usize = 2;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email regex");
    static ref PHONE: Regex =
        Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone regex");
    static ref LINKEDIN: Regex = Regex::new(r"linkedin").expect("linkedin regex");
    static ref GITHUB: Regex = Regex::new(r"github").expect("github regex");
    static ref PORTFOLIO: Regex =
        Regex::new(r"portfolio|website|personal site").expect("portfolio regex");
    static ref EDUCATION: Regex = Regex::new(
        r"\b(?:university|college|institute|degree|bachelor|master['’]?s|master of|mba|m\.s|ph\.?d|b\.tech|m\.tech|b\.e|m\.e|b\.sc|m\.sc|bca|mca)\b"
    )
    .expect("education regex");
    static ref HONORS: Regex =
        Regex::new(r"honou?rs|distinction|merit|scholarship|award|dean'?s list").expect("honors regex");
    static ref EXPERIENCE: Regex = Regex::new(
        r"\b(?:experience|worked|developed|implemented|designed|led|managed|built|created)\b"
    )
    .expect("experience regex");
    static ref PROJECTS: Regex =
        Regex::new(r"\b(?:projects?|built|created|developed|deployed)\b").expect("projects regex");
    static ref ACHIEVEMENTS: Regex = Regex::new(
        r"\b(?:achieved|improved|increased|reduced|optimi[sz]ed|enhanced|accelerated|won)\b"
    )
    .expect("achievements regex");
    static ref METRICS: Regex = Regex::new(
        r"\d+(?:\.\d+)?\s?%|\b\d+(?:\.\d+)?x\b|\bmillion\b|\bthousand\b|\busers\b|\brevenue\b|[$₹€£]\s?\d"
    )
    .expect("metrics regex");
    static ref ACTION_VERBS: Regex = Regex::new(
        r"\b(?:developed|implemented|designed|created|built|led|managed|optimi[sz]ed|improved|launched|architected)\b"
    )
    .expect("action verbs regex");
    static ref SECTION_HEADING: Regex = Regex::new(
        r"\b(experience|education|skills|projects|certifications|achievements|summary)\b"
    )
    .expect("section heading regex");
    static ref BULLET_LINE: Regex =
        Regex::new(r"(?m)^\s*[•·▪‣→–*\-]\s*\S").expect("bullet regex");

    static ref GPA_LABELLED: Regex = Regex::new(
        r"\b(?:c?gpa|cpi|sgpa)\b\s*(?:of|is|:|-|=)?\s*(\d{1,3}(?:\.\d+)?)(?:\s*/\s*(\d{1,4}(?:\.\d+)?))?"
    )
    .expect("labelled gpa regex");
    static ref GRADE_FRACTION: Regex =
        Regex::new(r"\b(\d{1,4}(?:\.\d+)?)\s*/\s*(\d{1,4})\b").expect("grade fraction regex");
    static ref GRADE_PERCENT: Regex =
        Regex::new(r"\b(\d{2,3}\.\d+)\s*%").expect("grade percent regex");

    // Case-insensitive because these run on the original (not lower-cased) text
    // so the extracted details keep their capitalization.
    static ref DEGREE: Regex = Regex::new(
        r"(?i)\b(?:bachelor(?:['’]?s)?|master['’]?s|master of|mba|m\.s|b\.tech|m\.tech|b\.e|m\.e|b\.sc|m\.sc|bca|mca|ph\.?d)\b[^\n,;|•]*"
    )
    .expect("degree regex");
    static ref INSTITUTION: Regex = Regex::new(
        r"(?i)[a-z&.' ]{0,40}?\b(?:university|college|institute)\b[^\n,;|•]*"
    )
    .expect("institution regex");

    static ref SKILL_PATTERNS: Vec<(&'static Skill, Regex)> = TECH_SKILLS
        .iter()
        .map(|s| {
            let re = if s.proper { proper_pattern(s.display) } else { term_pattern(s.term, false) };
            (s, re)
        })
        .collect();
    static ref SOFT_SKILL_PATTERNS: Vec<(&'static str, Regex)> = SOFT_SKILLS
        .iter()
        .map(|s| (*s, term_pattern(s, true)))
        .collect();
}

/// Matches `term` on token boundaries in lower-cased text. `+` and `#` count as
/// token characters so "c" never fires inside "c++". Spaces inside a term also
/// accept hyphens ("problem-solving").
fn term_pattern(term: &str, allow_plural: bool) -> Regex {
    let body = term
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[\s-]+");
    let plural = if allow_plural { "s?" } else { "" };
    Regex::new(&format!(r"(?:^|[^a-z0-9+#]){body}{plural}(?:[^a-z0-9+#]|$)"))
        .expect("skill term regex")
}

/// Matches a capitalized skill name on token boundaries in the original text,
/// so "Go" counts but "ready to go" does not.
fn proper_pattern(display: &str) -> Regex {
    Regex::new(&format!(
        r"(?:^|[^A-Za-z0-9+#]){}(?:[^A-Za-z0-9+#]|$)",
        regex::escape(display)
    ))
    .expect("proper skill regex")
}

/// Deterministic text fingerprint: a wrapping sum of the text's Unicode scalar
/// values. Identical text always yields the same value; small edits move it.
pub fn text_hash(text: &str) -> u64 {
    text.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64))
}

/// Everything the scorer knows about a resume, derived purely from its text.
#[derive(Debug, Clone, Default)]
pub struct FeatureSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
    pub has_portfolio: bool,
    /// In `TECH_SKILLS` order.
    pub found_skills: Vec<&'static Skill>,
    pub found_soft_skills: Vec<&'static str>,
    pub has_education: bool,
    /// Normalized to a 0-10 scale; always finite when present.
    pub cgpa: Option<f64>,
    pub has_honors: bool,
    pub has_experience: bool,
    pub has_projects: bool,
    pub has_achievements: bool,
    pub has_metrics: bool,
    pub has_action_verbs: bool,
    pub has_structure: bool,
    pub has_bullets: bool,
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub word_count: usize,
    pub line_count: usize,
}

impl FeatureSignals {
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();

        let found_skills = SKILL_PATTERNS
            .iter()
            .filter(|(skill, re)| re.is_match(if skill.proper { text } else { &lower }))
            .map(|(skill, _)| *skill)
            .collect();
        let found_soft_skills = SOFT_SKILL_PATTERNS
            .iter()
            .filter(|(_, re)| re.is_match(&lower))
            .map(|(term, _)| *term)
            .collect();

        let headings: HashSet<&str> = SECTION_HEADING
            .captures_iter(&lower)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();

        FeatureSignals {
            has_email: EMAIL.is_match(text),
            has_phone: PHONE.is_match(text),
            has_linkedin: LINKEDIN.is_match(&lower),
            has_github: GITHUB.is_match(&lower),
            has_portfolio: PORTFOLIO.is_match(&lower),
            found_skills,
            found_soft_skills,
            has_education: EDUCATION.is_match(&lower),
            cgpa: parse_cgpa(&lower),
            has_honors: HONORS.is_match(&lower),
            has_experience: EXPERIENCE.is_match(&lower),
            has_projects: PROJECTS.is_match(&lower),
            has_achievements: ACHIEVEMENTS.is_match(&lower),
            has_metrics: METRICS.is_match(&lower),
            has_action_verbs: ACTION_VERBS.is_match(&lower),
            has_structure: headings.len() >= SECTION_HEADINGS_REQUIRED,
            has_bullets: BULLET_LINE.is_match(text),
            degree: first_detail(&DEGREE, text),
            institution: first_detail(&INSTITUTION, text),
            word_count: text.split_whitespace().count(),
            line_count: text.lines().filter(|l| !l.trim().is_empty()).count(),
        }
    }

    pub fn skill_count(&self) -> usize {
        self.found_skills.len()
    }

    pub fn has_profile_link(&self) -> bool {
        self.has_linkedin || self.has_github || self.has_portfolio
    }

    /// CGPA as shown in `resumeDetails`, two decimals.
    pub fn cgpa_display(&self) -> Option<String> {
        self.cgpa.map(|v| format!("{v:.2}"))
    }
}

/// Finds a grade in lower-cased text and normalizes it to a 0-10 scale.
///
/// Tried in order: an explicit CGPA/GPA label, an unlabelled `value / scale`
/// on a known grading scale, then a decimal percentage. Anything that does not
/// come out finite and within 0-10 is treated as absent.
pub fn parse_cgpa(lower: &str) -> Option<f64> {
    labelled_grade(lower)
        .or_else(|| fraction_grade(lower))
        .or_else(|| percent_grade(lower))
        .filter(|v| v.is_finite() && (0.0..=10.0).contains(v))
}

fn labelled_grade(lower: &str) -> Option<f64> {
    let caps = GPA_LABELLED.captures(lower)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    match caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()) {
        Some(scale) if scale > 0.0 && value <= scale => Some(value / scale * 10.0),
        Some(_) => None,
        None if value <= 10.0 => Some(value),
        None if value <= 100.0 => Some(value / 10.0),
        None => None,
    }
}

fn fraction_grade(lower: &str) -> Option<f64> {
    GRADE_FRACTION.captures_iter(lower).find_map(|caps| {
        let raw_value = caps.get(1)?.as_str();
        let value: f64 = raw_value.parse().ok()?;
        let scale: f64 = caps.get(2)?.as_str().parse().ok()?;
        let known_scale = GRADE_SCALES.iter().any(|s| (s - scale).abs() < f64::EPSILON);
        // "3/4" is more often a fraction than a grade; require a decimal
        // value or a percent-style scale.
        let grade_like = raw_value.contains('.') || scale >= 100.0;
        if known_scale && grade_like && value > 0.0 && value <= scale {
            Some(value / scale * 10.0)
        } else {
            None
        }
    })
}

fn percent_grade(lower: &str) -> Option<f64> {
    GRADE_PERCENT.captures_iter(lower).find_map(|caps| {
        let value: f64 = caps.get(1)?.as_str().parse().ok()?;
        (40.0..=100.0).contains(&value).then(|| value / 10.0)
    })
}

fn first_detail(re: &Regex, text: &str) -> Option<String> {
    let found = re.find(text)?.as_str().trim();
    if found.is_empty() {
        return None;
    }
    Some(found.chars().take(DETAIL_MAX_CHARS).collect::<String>().trim_end().to_string())
}
