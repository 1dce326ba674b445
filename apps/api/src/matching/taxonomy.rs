//! Skill taxonomy: canonicalizes free-text skill names.
//!
//! The alias table maps each canonical skill to the spellings it absorbs.
//! Unknown skills pass through lower-cased so novel skills stay matchable by
//! exact string instead of being dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A skill name after normalization. Only constructed by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalSkill(String);

impl CanonicalSkill {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalSkill {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// canonical -> variants. Every variant list includes its own canonical key
/// where the product lists it that way; lookup checks the key separately anyway.
pub const SKILLS_TAXONOMY: &[(&str, &[&str])] = &[
    // Programming languages
    ("javascript", &["js", "javascript", "ecmascript", "es6", "es2015"]),
    ("typescript", &["ts", "typescript"]),
    ("python", &["python", "python3", "py"]),
    ("java", &["java", "java se", "java ee"]),
    ("c++", &["c++", "cpp", "cplusplus"]),
    ("c#", &["c#", "csharp", "c sharp"]),
    ("c", &["c", "c programming"]),
    ("go", &["go", "golang"]),
    ("rust", &["rust"]),
    ("ruby", &["ruby", "rb"]),
    ("php", &["php"]),
    ("swift", &["swift"]),
    ("kotlin", &["kotlin"]),
    ("scala", &["scala"]),
    ("r", &["r", "r programming"]),
    ("matlab", &["matlab"]),
    ("sql", &["sql", "structured query language"]),
    ("html", &["html", "html5"]),
    ("css", &["css", "css3"]),
    // Frontend
    ("react", &["react", "reactjs", "react.js"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("angular", &["angular", "angularjs"]),
    ("svelte", &["svelte"]),
    ("next.js", &["next", "nextjs", "next.js"]),
    ("nuxt", &["nuxt", "nuxtjs"]),
    ("gatsby", &["gatsby", "gatsbyjs"]),
    // Backend
    ("node.js", &["node", "nodejs", "node.js"]),
    ("express", &["express", "expressjs", "express.js"]),
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("fastapi", &["fastapi"]),
    ("spring", &["spring", "spring boot", "spring framework"]),
    ("asp.net", &["asp.net", "aspnet", ".net"]),
    ("rails", &["rails", "ruby on rails", "ror"]),
    // Databases
    ("mongodb", &["mongodb", "mongo"]),
    ("postgresql", &["postgresql", "postgres", "psql"]),
    ("mysql", &["mysql"]),
    ("redis", &["redis"]),
    ("dynamodb", &["dynamodb"]),
    ("firebase", &["firebase", "firestore"]),
    ("sqlite", &["sqlite"]),
    ("cassandra", &["cassandra"]),
    ("elasticsearch", &["elasticsearch", "elastic"]),
    // Cloud & DevOps
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform"]),
    ("docker", &["docker"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("terraform", &["terraform"]),
    ("jenkins", &["jenkins"]),
    ("github actions", &["github actions", "gh actions"]),
    ("ci/cd", &["ci/cd", "cicd", "continuous integration"]),
    // Data science & ML
    ("tensorflow", &["tensorflow", "tf"]),
    ("pytorch", &["pytorch", "torch"]),
    ("scikit-learn", &["scikit-learn", "sklearn", "scikit learn"]),
    ("pandas", &["pandas"]),
    ("numpy", &["numpy"]),
    ("jupyter", &["jupyter", "jupyter notebook"]),
    ("keras", &["keras"]),
    ("opencv", &["opencv", "cv2"]),
    // Tools & platforms
    ("git", &["git", "version control"]),
    ("github", &["github"]),
    ("gitlab", &["gitlab"]),
    ("jira", &["jira"]),
    ("figma", &["figma"]),
    ("vscode", &["vscode", "vs code", "visual studio code"]),
    ("postman", &["postman"]),
    ("linux", &["linux", "unix"]),
    ("bash", &["bash", "shell"]),
    // Testing
    ("jest", &["jest"]),
    ("pytest", &["pytest"]),
    ("selenium", &["selenium"]),
    ("cypress", &["cypress"]),
    ("junit", &["junit"]),
    // Soft skills
    ("agile", &["agile", "scrum", "kanban"]),
    ("leadership", &["leadership", "team lead"]),
    ("communication", &["communication", "collaboration"]),
    ("problem solving", &["problem solving", "debugging"]),
    ("project management", &["project management", "pm"]),
];

/// Canonicalizes one skill name. Total and idempotent.
pub fn normalize(skill: &str) -> CanonicalSkill {
    let key = skill.trim().to_lowercase();

    let canonical = SKILLS_TAXONOMY
        .iter()
        .find(|(canonical, _)| *canonical == key)
        .or_else(|| {
            SKILLS_TAXONOMY
                .iter()
                .find(|(_, variants)| variants.contains(&key.as_str()))
        })
        .map(|(canonical, _)| (*canonical).to_string());

    CanonicalSkill(canonical.unwrap_or(key))
}

/// Canonicalizes a list of skills, dropping blanks and duplicates.
/// First-seen order is kept so downstream output is deterministic.
pub fn normalize_many<I, S>(skills: I) -> Vec<CanonicalSkill>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<CanonicalSkill> = Vec::new();
    for skill in skills {
        let canonical = normalize(skill.as_ref());
        if canonical.is_empty() || out.contains(&canonical) {
            continue;
        }
        out.push(canonical);
    }
    out
}

/// All listed spellings of a canonical skill; empty when the skill is not in the table.
pub fn variations(canonical: &str) -> &'static [&'static str] {
    let key = canonical.trim().to_lowercase();
    SKILLS_TAXONOMY
        .iter()
        .find(|(c, _)| *c == key)
        .map(|(_, variants)| *variants)
        .unwrap_or(&[])
}
