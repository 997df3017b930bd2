use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResumeTemplate {
    pub id: &'static str,
    pub title: &'static str,
    /// Role the template is written for; `?role=` filters on it.
    pub role: &'static str,
    pub tags: &'static [&'static str],
}

const fn template(
    id: &'static str,
    title: &'static str,
    role: &'static str,
    tags: &'static [&'static str],
) -> ResumeTemplate {
    ResumeTemplate {
        id,
        title,
        role,
        tags,
    }
}

pub const TEMPLATES: &[ResumeTemplate] = &[
    template("data-pro", "Data Pro Template", "Data Analyst", &["Excel", "SQL", "Python"]),
    template("analytics-expert", "Analytics Expert", "Data Analyst", &["Tableau", "R", "Statistics"]),
    template("dev-portfolio", "Dev Portfolio", "Software Developer", &["JavaScript", "React", "Node.js"]),
    template("marketing-maven", "Marketing Maven", "Marketing", &["SEO", "Analytics", "Content"]),
    template("design-studio", "Design Studio", "Designer", &["Figma", "Adobe XD", "UI/UX"]),
    template("bi-specialist", "BI Specialist", "Data Analyst", &["Power BI", "DAX", "ETL"]),
];

pub fn find(id: &str) -> Option<&'static ResumeTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Templates whose role contains `role`, ignoring case. A missing or blank
/// role returns the whole catalog.
pub fn by_role(role: Option<&str>) -> Vec<&'static ResumeTemplate> {
    let needle = role.map(str::trim).unwrap_or_default().to_lowercase();
    TEMPLATES
        .iter()
        .filter(|t| needle.is_empty() || t.role.to_lowercase().contains(&needle))
        .collect()
}

impl ResumeTemplate {
    pub fn file_name(&self) -> String {
        format!("{}-template.txt", self.id)
    }

    /// Plain-text resume skeleton with the template's focus areas filled in.
    pub fn render(&self) -> String {
        format!(
            "CareerCraft Template: {title}\n\
             Role: {role}\n\
             Highlight: {tags}\n\
             \n\
             YOUR NAME\n\
             email@example.com | +1 (555) 000-0000 | linkedin.com/in/you | github.com/you\n\
             \n\
             SUMMARY\n\
             Two lines on the {role} work you do best and the results it delivered.\n\
             \n\
             SKILLS\n\
             {tags}\n\
             \n\
             EXPERIENCE\n\
             Job Title, Company (Start - End)\n\
             - Led ... which improved ... by ...%\n\
             - Built ... used by ... users\n\
             \n\
             PROJECTS\n\
             Project Name: what you built, the stack, and a measurable outcome\n\
             \n\
             EDUCATION\n\
             Degree, Institution, CGPA / GPA\n",
            title = self.title,
            role = self.role,
            tags = self.tags.join(", "),
        )
    }
}
