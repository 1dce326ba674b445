//! Role catalog: compiled-in tech role definitions. Read-only for the process lifetime.

use serde::Serialize;

use crate::models::profile::ExperienceLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    pub preferred_skills: &'static [&'static str],
    pub typical_tools: &'static [&'static str],
    pub typical_stack: &'static str,
    pub responsibilities: &'static [&'static str],
    pub example_projects: &'static [&'static str],
    pub career_trajectory: &'static str,
    pub min_experience_level: ExperienceLevel,
    pub related_roles: &'static [&'static str],
}

pub static ROLE_CATALOG: &[RoleProfile] = &[
    RoleProfile {
        id: "software-engineer",
        name: "Software Engineer",
        summary: "Build scalable software systems solving real-world problems",
        description: "Software Engineers design, develop, test, and maintain software applications. \
            They work across the full development lifecycle, collaborating with cross-functional \
            teams to deliver high-quality software solutions.",
        required_skills: &["programming", "data structures", "algorithms", "git", "debugging"],
        preferred_skills: &["java", "python", "c++", "javascript", "sql", "testing", "agile"],
        typical_tools: &["git", "jira", "vscode", "docker", "ci/cd"],
        typical_stack: "Varies by company - could be Java/Spring, Python/Django, or JavaScript/Node.js",
        responsibilities: &[
            "Write clean, maintainable code",
            "Design system architectures",
            "Debug and optimize existing systems",
            "Collaborate with product and design teams",
            "Participate in code reviews",
            "Write technical documentation",
        ],
        example_projects: &[
            "Build a scalable REST API",
            "Develop microservices architecture",
            "Create automated testing frameworks",
            "Optimize database queries and system performance",
        ],
        career_trajectory: "Junior SWE → Mid-level SWE → Senior SWE → Staff/Principal Engineer → Engineering Manager/Architect",
        min_experience_level: ExperienceLevel::Beginner,
        related_roles: &["frontend-engineer", "backend-engineer", "full-stack-engineer"],
    },
    RoleProfile {
        id: "frontend-engineer",
        name: "Frontend Engineer",
        summary: "Create engaging user interfaces and exceptional user experiences",
        description: "Frontend Engineers build the visual and interactive elements of web and mobile \
            applications. They focus on user experience, responsive design, and performance optimization.",
        required_skills: &["html", "css", "javascript", "responsive design", "git"],
        preferred_skills: &["react", "vue", "typescript", "tailwind", "webpack", "figma", "accessibility"],
        typical_tools: &["vscode", "figma", "chrome devtools", "git", "npm"],
        typical_stack: "React/Vue/Angular + TypeScript + CSS frameworks + REST APIs",
        responsibilities: &[
            "Build responsive user interfaces",
            "Implement designs from mockups",
            "Optimize for performance and accessibility",
            "Integrate with backend APIs",
            "Ensure cross-browser compatibility",
            "Write component tests",
        ],
        example_projects: &[
            "Build a responsive e-commerce site",
            "Create a design system and component library",
            "Develop an interactive data dashboard",
            "Optimize web vitals and page load times",
        ],
        career_trajectory: "Junior Frontend → Mid-level → Senior Frontend → Lead Frontend → Frontend Architect",
        min_experience_level: ExperienceLevel::Beginner,
        related_roles: &["full-stack-engineer", "ux-engineer", "software-engineer"],
    },
    RoleProfile {
        id: "backend-engineer",
        name: "Backend Engineer",
        summary: "Build robust server-side systems and APIs",
        description: "Backend Engineers develop server-side logic, databases, and APIs. They ensure \
            applications are scalable, secure, and performant.",
        required_skills: &["programming", "databases", "apis", "sql", "git"],
        preferred_skills: &["node.js", "python", "java", "postgresql", "redis", "docker", "aws", "microservices"],
        typical_tools: &["postman", "docker", "sql client", "aws/gcp", "monitoring tools"],
        typical_stack: "Node.js/Python/Java + PostgreSQL/MongoDB + Docker + AWS/Azure",
        responsibilities: &[
            "Design and implement APIs",
            "Manage database schemas and queries",
            "Build authentication and authorization systems",
            "Optimize server performance",
            "Implement caching strategies",
            "Write API documentation",
        ],
        example_projects: &[
            "Build a RESTful API with auth",
            "Design a scalable microservices architecture",
            "Implement real-time data processing pipelines",
            "Create database migration and backup systems",
        ],
        career_trajectory: "Junior Backend → Mid-level → Senior Backend → Staff Engineer → Backend Architect",
        min_experience_level: ExperienceLevel::Beginner,
        related_roles: &["full-stack-engineer", "devops-engineer", "software-engineer"],
    },
    RoleProfile {
        id: "full-stack-engineer",
        name: "Full-Stack Engineer",
        summary: "Work across the entire application stack from UI to database",
        description: "Full-Stack Engineers handle both frontend and backend development. They build \
            complete features end-to-end and understand the full application architecture.",
        required_skills: &["html", "css", "javascript", "databases", "apis", "git"],
        preferred_skills: &["react", "node.js", "typescript", "postgresql", "docker", "aws", "testing"],
        typical_tools: &["vscode", "postman", "docker", "git", "database client"],
        typical_stack: "React/Next.js + Node.js/Express + PostgreSQL + Docker + Cloud platform",
        responsibilities: &[
            "Build features across frontend and backend",
            "Design database schemas",
            "Create and consume APIs",
            "Deploy and monitor applications",
            "Implement security best practices",
            "Mentor junior developers",
        ],
        example_projects: &[
            "Build a full-stack web application",
            "Create an e-commerce platform",
            "Develop a SaaS application with billing",
            "Build a real-time collaboration tool",
        ],
        career_trajectory: "Full-Stack Developer → Senior Full-Stack → Technical Lead → Engineering Manager",
        min_experience_level: ExperienceLevel::Intermediate,
        related_roles: &["frontend-engineer", "backend-engineer", "software-engineer"],
    },
    RoleProfile {
        id: "data-scientist",
        name: "Data Scientist",
        summary: "Extract insights from data using statistics and machine learning",
        description: "Data Scientists analyze complex data sets to inform business decisions. They \
            build predictive models, conduct statistical analyses, and communicate findings to stakeholders.",
        required_skills: &["python", "statistics", "sql", "data analysis", "machine learning"],
        preferred_skills: &["pandas", "numpy", "scikit-learn", "tensorflow", "jupyter", "r", "tableau", "a/b testing"],
        typical_tools: &["jupyter", "python", "sql", "tableau", "git"],
        typical_stack: "Python + Pandas/NumPy + Scikit-learn/TensorFlow + SQL + Visualization tools",
        responsibilities: &[
            "Analyze large datasets",
            "Build predictive models",
            "Design experiments and A/B tests",
            "Create data visualizations",
            "Communicate findings to stakeholders",
            "Deploy ML models to production",
        ],
        example_projects: &[
            "Build a customer churn prediction model",
            "Create a recommendation system",
            "Analyze user behavior patterns",
            "Develop a time series forecasting model",
        ],
        career_trajectory: "Junior Data Scientist → Data Scientist → Senior Data Scientist → Lead DS → Principal Data Scientist",
        min_experience_level: ExperienceLevel::Intermediate,
        related_roles: &["ml-engineer", "data-analyst", "data-engineer"],
    },
    RoleProfile {
        id: "data-analyst",
        name: "Data Analyst",
        summary: "Turn data into actionable business insights",
        description: "Data Analysts collect, process, and analyze data to help organizations make \
            informed decisions. They create reports, dashboards, and visualizations.",
        required_skills: &["sql", "excel", "data analysis", "data visualization"],
        preferred_skills: &["python", "tableau", "power bi", "statistics", "r", "business intelligence"],
        typical_tools: &["excel", "tableau", "sql", "python", "power bi"],
        typical_stack: "SQL + Python/R + Tableau/Power BI + Excel",
        responsibilities: &[
            "Query and analyze data from databases",
            "Create dashboards and reports",
            "Identify trends and patterns",
            "Support business decision-making",
            "Clean and prepare data",
            "Present findings to stakeholders",
        ],
        example_projects: &[
            "Build executive dashboards",
            "Analyze sales and marketing performance",
            "Create customer segmentation analyses",
            "Develop KPI tracking systems",
        ],
        career_trajectory: "Junior Analyst → Data Analyst → Senior Data Analyst → Analytics Manager → Director of Analytics",
        min_experience_level: ExperienceLevel::Beginner,
        related_roles: &["data-scientist", "business-intelligence-analyst", "data-engineer"],
    },
    RoleProfile {
        id: "ml-engineer",
        name: "Machine Learning Engineer",
        summary: "Build and deploy production machine learning systems",
        description: "ML Engineers design, build, and deploy machine learning models at scale. They \
            bridge the gap between data science and software engineering.",
        required_skills: &["python", "machine learning", "deep learning", "programming", "mathematics"],
        preferred_skills: &["tensorflow", "pytorch", "scikit-learn", "docker", "kubernetes", "aws", "mlops"],
        typical_tools: &["python", "jupyter", "docker", "git", "cloud platforms", "ml frameworks"],
        typical_stack: "Python + TensorFlow/PyTorch + Docker + Kubernetes + Cloud ML services",
        responsibilities: &[
            "Design ML model architectures",
            "Train and optimize models",
            "Deploy models to production",
            "Build ML pipelines",
            "Monitor model performance",
            "Implement MLOps practices",
        ],
        example_projects: &[
            "Build a real-time fraud detection system",
            "Create a computer vision application",
            "Develop NLP models for text analysis",
            "Implement recommendation engines",
        ],
        career_trajectory: "ML Engineer → Senior ML Engineer → Staff ML Engineer → ML Architect",
        min_experience_level: ExperienceLevel::Intermediate,
        related_roles: &["data-scientist", "ai-researcher", "software-engineer"],
    },
    RoleProfile {
        id: "devops-engineer",
        name: "DevOps/Cloud Engineer",
        summary: "Automate infrastructure and streamline software deployment",
        description: "DevOps Engineers build and maintain the infrastructure and tools that enable \
            rapid, reliable software delivery. They focus on automation, monitoring, and scalability.",
        required_skills: &["linux", "networking", "scripting", "ci/cd", "cloud platforms"],
        preferred_skills: &["docker", "kubernetes", "terraform", "aws", "jenkins", "python", "bash", "monitoring"],
        typical_tools: &["terraform", "docker", "kubernetes", "jenkins", "aws/azure/gcp", "monitoring tools"],
        typical_stack: "Cloud platforms + Docker + Kubernetes + Terraform + CI/CD tools",
        responsibilities: &[
            "Manage cloud infrastructure",
            "Build CI/CD pipelines",
            "Automate deployment processes",
            "Monitor system performance",
            "Ensure security and compliance",
            "Optimize costs and scalability",
        ],
        example_projects: &[
            "Build automated deployment pipelines",
            "Implement infrastructure as code",
            "Create monitoring and alerting systems",
            "Migrate applications to cloud",
        ],
        career_trajectory: "DevOps Engineer → Senior DevOps → Platform Engineer → SRE → Infrastructure Architect",
        min_experience_level: ExperienceLevel::Intermediate,
        related_roles: &["site-reliability-engineer", "cloud-architect", "backend-engineer"],
    },
    RoleProfile {
        id: "cybersecurity-analyst",
        name: "Cybersecurity Analyst",
        summary: "Protect systems and data from security threats",
        description: "Cybersecurity Analysts monitor, detect, and respond to security threats. They \
            implement security measures and ensure compliance with security policies.",
        required_skills: &["networking", "security fundamentals", "linux", "incident response"],
        preferred_skills: &["python", "security tools", "siem", "penetration testing", "security+", "cryptography"],
        typical_tools: &["siem tools", "wireshark", "metasploit", "burp suite", "security scanners"],
        typical_stack: "Security tools + Python/Bash + SIEM platforms + Cloud security services",
        responsibilities: &[
            "Monitor security alerts",
            "Investigate security incidents",
            "Conduct vulnerability assessments",
            "Implement security controls",
            "Develop security policies",
            "Provide security training",
        ],
        example_projects: &[
            "Build security monitoring systems",
            "Conduct penetration testing",
            "Implement zero-trust architecture",
            "Develop incident response playbooks",
        ],
        career_trajectory: "Security Analyst → Senior Security Analyst → Security Engineer → Security Architect → CISO",
        min_experience_level: ExperienceLevel::Beginner,
        related_roles: &["penetration-tester", "security-engineer", "compliance-analyst"],
    },
    RoleProfile {
        id: "product-manager",
        name: "Product Manager",
        summary: "Drive product strategy and deliver customer value",
        description: "Product Managers define product vision, strategy, and roadmap. They work with \
            engineering, design, and stakeholders to build products customers love.",
        required_skills: &["product strategy", "communication", "data analysis", "agile", "user research"],
        preferred_skills: &["sql", "jira", "figma", "analytics tools", "a/b testing", "technical writing"],
        typical_tools: &["jira", "figma", "analytics tools", "sql", "presentation software"],
        typical_stack: "Product management tools + Analytics platforms + Collaboration tools",
        responsibilities: &[
            "Define product vision and strategy",
            "Prioritize product backlog",
            "Work with engineering and design",
            "Conduct user research",
            "Analyze product metrics",
            "Communicate with stakeholders",
        ],
        example_projects: &[
            "Launch a new product feature",
            "Redesign user onboarding flow",
            "Define product roadmap",
            "Conduct competitive analysis",
        ],
        career_trajectory: "Associate PM → Product Manager → Senior PM → Group PM → Director of Product → VP of Product",
        min_experience_level: ExperienceLevel::Intermediate,
        related_roles: &["technical-product-manager", "product-owner", "program-manager"],
    },
];

/// Interest keyword -> role ids it suggests.
const INTEREST_ROLE_MAP: &[(&str, &[&str])] = &[
    ("ai", &["ml-engineer", "data-scientist"]),
    ("machine learning", &["ml-engineer", "data-scientist"]),
    ("web development", &["frontend-engineer", "full-stack-engineer", "backend-engineer"]),
    ("frontend", &["frontend-engineer", "full-stack-engineer"]),
    ("backend", &["backend-engineer", "full-stack-engineer"]),
    ("mobile", &["software-engineer", "frontend-engineer"]),
    ("data", &["data-scientist", "data-analyst", "ml-engineer"]),
    ("cloud", &["devops-engineer", "backend-engineer"]),
    ("security", &["cybersecurity-analyst"]),
    ("product", &["product-manager"]),
];

pub fn list_roles() -> &'static [RoleProfile] {
    ROLE_CATALOG
}

pub fn get_role(id: &str) -> Option<&'static RoleProfile> {
    ROLE_CATALOG.iter().find(|r| r.id == id)
}

/// Roles whose required or preferred skills contain `skill` (case-insensitive substring).
pub fn find_roles_by_skill(skill: &str) -> Vec<&'static RoleProfile> {
    let needle = skill.trim().to_lowercase();
    if needle.is_empty() {
        return vec![];
    }

    ROLE_CATALOG
        .iter()
        .filter(|role| {
            role.required_skills
                .iter()
                .chain(role.preferred_skills.iter())
                .any(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Suggests role ids from free-text interests. Deduplicated, first-seen order.
pub fn recommend_roles_by_interests<S: AsRef<str>>(interests: &[S]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for interest in interests {
        let interest = interest.as_ref().to_lowercase();
        for (keyword, roles) in INTEREST_ROLE_MAP {
            if !interest.contains(*keyword) {
                continue;
            }
            for &role in roles.iter() {
                if !out.contains(&role) {
                    out.push(role);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = ROLE_CATALOG.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ROLE_CATALOG.len());
    }

    #[test]
    fn test_get_role_hit_and_miss() {
        assert_eq!(get_role("data-analyst").map(|r| r.name), Some("Data Analyst"));
        assert!(get_role("astronaut").is_none());
    }

    #[test]
    fn test_find_roles_by_skill_is_case_insensitive_substring() {
        let ids: Vec<&str> = find_roles_by_skill("KUBER").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["ml-engineer", "devops-engineer"]);
    }

    #[test]
    fn test_find_roles_by_blank_skill_is_empty() {
        assert!(find_roles_by_skill("   ").is_empty());
    }

    #[test]
    fn test_recommend_roles_by_interests_dedupes() {
        let roles = recommend_roles_by_interests(&["Machine Learning", "AI", "Cloud computing"]);
        assert_eq!(
            roles,
            vec!["ml-engineer", "data-scientist", "devops-engineer", "backend-engineer"]
        );
    }

    #[test]
    fn test_recommend_roles_without_interests() {
        let empty: [&str; 0] = [];
        assert!(recommend_roles_by_interests(&empty).is_empty());
    }
}
