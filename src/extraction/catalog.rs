//! Fixed vocabularies used by the field extractors.
//!
//! These are process-wide, read-only tables. Tuning a catalog never requires
//! touching extractor logic.

/// Named technologies and methodologies tested against the whole résumé.
pub const SKILL_CATALOG: &[&str] = &[
    "Python",
    "Flask",
    "Django",
    "Machine Learning",
    "SQL",
    "Java",
    "React",
    "AWS",
    "JavaScript",
    "HTML",
    "CSS",
    "TensorFlow",
    "Pandas",
    "NumPy",
    "Docker",
    "Kubernetes",
    "Git",
    "Azure",
    "Linux",
    "Node.js",
    "C#",
    "C++",
    "Go",
    "PHP",
    "TypeScript",
    "Tableau",
    "Power BI",
    "Jupyter",
    "Spark",
    "Hadoop",
    "Scala",
    "Cloud",
    "Vagrant",
    "LLMs",
    "GPT",
    "Re-enforcement",
    "Site Reliability",
    "DevOps",
    "Microservices",
    "NOSQL",
    "Apache Kafka",
    "Apache Webserver",
    "Blockchain",
    "Performance engineering",
    "AI model Training",
    "Data Science",
    "Feature Engineering",
    "AI",
    "Shell Script",
    "Intrusion Detection",
    "Matlab",
    "R",
    "Agile",
    "SDLC",
];

/// Natural languages checked when the résumé has no "Languages" section.
pub const LANGUAGE_CATALOG: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Chinese",
    "Japanese",
    "Arabic",
    "Hindi",
    "Bengali",
    "Russian",
    "Portuguese",
];

/// Degree and certification terms used when the Education section yields nothing.
pub const QUALIFICATION_CATALOG: &[&str] = &[
    "Bachelor's",
    "Master's",
    "PhD",
    "Degree",
    "Certification",
    "Diploma",
    "BSc",
    "MSc",
    "B.A.",
    "M.A.",
    "BTech",
    "MTech",
    "MBA",
    "Engineering",
    "Architecture",
    "Computer Science",
    "Information Technology",
    "Data Science",
    "Machine Learning",
    "AI",
    "Software Engineering",
    "CSSA",
    "Certified",
    "Business",
    "MIS",
    "University",
];

/// An Education line is kept verbatim when it contains one of these (case-sensitive).
pub const DEGREE_MARKERS: &[&str] = &["Bachelor", "Master", "PhD", "Degree"];

/// Lines that count as a country in the contact "Details" block.
pub const COUNTRY_TOKENS: &[&str] = &["United States", "USA", "U.S.", "U.S.A."];

/// Role nouns that flag a line as a job title in the employment line scan.
pub const ROLE_KEYWORDS: &[&str] = &[
    "architect",
    "analyst",
    "lead",
    "principal",
    "manager",
    "director",
    "engineer",
];
