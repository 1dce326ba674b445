// Prompt constants for AI-assisted role matching.
// JSON-only enforcement lives in llm_client::prompts::JSON_ONLY_SYSTEM.

use crate::matching::roles::RoleProfile;
use crate::models::profile::UserProfile;

/// Role match prompt template.
/// Replace: {name}, {major}, {experience_level}, {skills}, {interests}, {target_roles},
///          {resume_line}, {role_name}, {role_summary}, {required_skills},
///          {preferred_skills}, {min_experience}, {scoring_guidance}
pub const ROLE_MATCH_PROMPT_TEMPLATE: &str = r#"You are a career advisor analyzing a candidate's fit for a specific tech role.

CANDIDATE PROFILE:
- Name: {name}
- Major: {major}
- Experience Level: {experience_level}
- Current Skills: {skills}
- Interests: {interests}
- Target Roles: {target_roles}
{resume_line}
ROLE: {role_name}
- Summary: {role_summary}
- Required Skills: {required_skills}
- Preferred Skills: {preferred_skills}
- Min Experience: {min_experience}

TASK:
Analyze how well this candidate matches this role. Be realistic but encouraging. Consider:
1. Skills overlap (both technical and transferable)
2. Experience level fit
3. Interest alignment
4. Growth potential

Respond with ONLY a valid JSON object in this exact format:
{
  "score": <number 0-100>,
  "matchedSkills": ["skill1", "skill2"],
  "gapSkills": ["skill3", "skill4"],
  "bonusSkills": ["skill5"],
  "matchLevel": "excellent|good|fair|needs-development",
  "recommendation": "Personalized 2-sentence recommendation"
}

SCORING GUIDANCE:
- 85-100: Excellent fit, candidate has most required skills and clear interest
- 70-84: Good fit, candidate has core foundation and matching interests
- 55-69: Fair fit, candidate has potential and some relevant skills
- Below 55: Needs development, but still achievable with effort
{scoring_guidance}"#;

/// Appended when generous scoring is enabled in config.
pub const GENEROUS_SCORING_GUIDANCE: &str = "
IMPORTANT: Be generous and encouraging. Students with matching interests and some foundation \
skills should score 65-90%. Only give very low scores (<50%) if there's almost no skill overlap. Consider:
- Matching major/interests as worth 20-30 points alone
- Any relevant coursework or projects
- Transferable skills and learning potential
- Growth mindset and career trajectory";

/// Appended when generous scoring is disabled.
pub const STRICT_SCORING_GUIDANCE: &str = "
IMPORTANT: Score strictly on demonstrated skills. Interests alone should not raise the score \
above 55.";

pub fn build_role_match_prompt(profile: &UserProfile, role: &RoleProfile, generous: bool) -> String {
    let skills = profile.skill_pool().join(", ");
    let resume_line = match &profile.resume {
        Some(resume) if !resume.normalized_skills.is_empty() => {
            format!("- Resume Skills: {}\n", resume.normalized_skills.join(", "))
        }
        _ => String::new(),
    };
    let guidance = if generous {
        GENEROUS_SCORING_GUIDANCE
    } else {
        STRICT_SCORING_GUIDANCE
    };

    let interests = profile.interests.join(", ");
    let target_roles = profile.target_roles.join(", ");
    let required_skills = role.required_skills.join(", ");
    let preferred_skills = role.preferred_skills.join(", ");

    fill_template(
        ROLE_MATCH_PROMPT_TEMPLATE,
        &[
            ("name", profile.name.as_str()),
            ("major", profile.major.as_str()),
            ("experience_level", profile.experience_level.as_str()),
            ("skills", skills.as_str()),
            ("interests", interests.as_str()),
            ("target_roles", target_roles.as_str()),
            ("resume_line", resume_line.as_str()),
            ("role_name", role.name),
            ("role_summary", role.summary),
            ("required_skills", required_skills.as_str()),
            ("preferred_skills", preferred_skills.as_str()),
            ("min_experience", role.min_experience_level.display_name()),
            ("scoring_guidance", guidance),
        ],
    )
}

/// Substitutes `{key}` placeholders in a single pass. Inserted values are not
/// rescanned, and braces that name no known key are kept as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values
            .iter()
            .find(|(key, _)| tail.strip_prefix(*key).is_some_and(|after| after.starts_with('}')));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
