// Career-advice prompt. The headings and fenced blocks requested here are the
// contract the formatter parses; change both together.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const ADVICE_SYSTEM: &str = "\
You are an expert career advisor and coach. \
Your goal is to provide clear, actionable, and visually structured career advice. \
Respond in Markdown only, using exactly the section headings you are given.";

/// Placeholder used when the user did not upload a resume.
pub const NO_RESUME: &str = "No resume provided.";

/// Advice prompt template. Replace `{interest}`, `{bio}` and `{resume}` before sending.
pub const ADVICE_PROMPT_TEMPLATE: &str = r#"Format your entire response in Markdown, making it highly visual and structured.

Here is the user's profile:
Primary Interest Area: {interest}
Bio: {bio}
Resume Content: {resume}

Important Instructions:
1. Focus PRIMARILY on the user's chosen interest area ({interest}). All advice should be specifically tailored to this field.
2. If a resume is provided, analyze their current skills and experience to provide more personalized recommendations.
3. Ensure all recommendations, courses, and projects are SPECIFICALLY relevant to {interest}.
4. Use the resume content to identify transferable skills that would be valuable in {interest}.

Provide a structured response with the following sections:

### 💫 Quick Summary
A brief 2-3 sentence overview focusing specifically on their potential in {interest}, highlighting relevant existing skills and clear next steps.

### 🎯 Recommended Roles
Present 3 recommended roles IN THE {interest} FIELD ONLY in this format:
1. **Role Name** (Match Score: X/10)
    - Salary Range: $XX,XXX - $XXX,XXX
    - Key Requirements: req1, req2, req3
    - Why It Fits: Brief explanation based on their background

### 📊 Skills Assessment
Analyze their current skills relevant to {interest}. Use this format:
```skill-meter
Current Skills Relevant to {interest}:
Skill Name     [█████░░░░░] 50%
```
Include 4-5 most relevant skills for {interest}, showing both strengths and areas for improvement.

### 📚 Learning Path
Present a structured timeline SPECIFIC to {interest}:
1. **Month 1-2: Foundation**
    - Course: "Course Name" (Platform) - Must be relevant to {interest}
    - Project: "Project idea" - Must be relevant to {interest}
    - Expected Outcome: "What they'll learn"

### 💡 Project Portfolio
Present 3 project ideas AS CARDS that are SPECIFICALLY for {interest}:
```project-card
Project: Name
Difficulty: ⭐⭐⭐☆☆
Duration: 2 weeks
Skills: skill1, skill2
Description: Brief description
```

### 🎓 Certifications
List 2-3 recommended certifications SPECIFIC to {interest}:
- Certificate Name (Provider)
- Difficulty Level: ⭐⭐⭐☆☆
- Time Commitment: X-Y months
- Cost Range: $XXX (details)

Remember to:
- Keep ALL advice focused on {interest}
- Use their resume/background to make recommendations more relevant
- Be specific and actionable in all recommendations
- Use proper formatting for visual elements (skill bars, project cards)"#;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(interest|bio|resume)\}").expect("valid placeholder pattern"));

/// Fills the advice template in a single pass, so placeholder-like text inside
/// any user field is copied literally.
pub fn build_advice_prompt(bio: &str, interest: &str, resume_text: Option<&str>) -> String {
    let resume = resume_text
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(NO_RESUME);
    PLACEHOLDER
        .replace_all(ADVICE_PROMPT_TEMPLATE, |caps: &Captures| match &caps[1] {
            "interest" => interest,
            "bio" => bio,
            _ => resume,
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::projects::PROJECT_CARD_FENCE;
    use crate::format::sections::SectionKey;
    use crate::format::skills::SKILL_METER_FENCE;

    #[test]
    fn test_prompt_requests_every_rendered_section() {
        let prompt = build_advice_prompt("bio", "DevOps", None);
        for key in SectionKey::ALL {
            assert!(prompt.contains(key.heading()), "prompt misses {}", key.as_str());
        }
        assert!(prompt.contains(SKILL_METER_FENCE));
        assert!(prompt.contains(PROJECT_CARD_FENCE));
    }

    #[test]
    fn test_placeholders_are_filled() {
        let prompt = build_advice_prompt("Java developer", "DevOps", Some("10 years of Java"));
        assert!(prompt.contains("Primary Interest Area: DevOps"));
        assert!(prompt.contains("Bio: Java developer"));
        assert!(prompt.contains("Resume Content: 10 years of Java"));
        assert!(!prompt.contains("{interest}"));
    }

    #[test]
    fn test_missing_resume_uses_placeholder() {
        let prompt = build_advice_prompt("bio", "Cybersecurity", Some("  "));
        assert!(prompt.contains("Resume Content: No resume provided."));
    }

    #[test]
    fn test_placeholders_in_user_fields_are_not_expanded() {
        let prompt = build_advice_prompt("likes {resume}", "Web {bio}", Some("cv text"));
        assert!(prompt.contains("Primary Interest Area: Web {bio}\n"));
        assert!(prompt.contains("Bio: likes {resume}\n"));
        assert!(prompt.contains("Resume Content: cv text"));
    }
}
