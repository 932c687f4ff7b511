use crate::models::question::QuestionCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVariant {
    Detailed,
    Simplified,
}

struct CategoryFocus {
    focus: &'static str,
    instruction: &'static str,
    type_hint: &'static str,
}

fn category_focus(category: QuestionCategory) -> CategoryFocus {
    match category {
        QuestionCategory::Technical => CategoryFocus {
            focus: "technical skills, coding problems, system design, and domain-specific knowledge",
            instruction: "Ensure questions are technically relevant to the specific role and include problems that test their expertise.",
            type_hint: "technical",
        },
        QuestionCategory::Behavioral => CategoryFocus {
            focus: "soft skills, past experiences, teamwork, leadership, and problem-solving scenarios",
            instruction: "Create scenario-based questions that reveal how the candidate handles real workplace situations.",
            type_hint: "behavioral",
        },
        QuestionCategory::Mixed => CategoryFocus {
            focus: "a mix of technical skills and behavioral aspects",
            instruction: "Balance technical and behavioral questions to assess both skills and cultural fit.",
            type_hint: "technical or behavioral",
        },
    }
}

pub fn build_prompt(
    variant: PromptVariant,
    job_title: &str,
    count: usize,
    category: QuestionCategory,
) -> String {
    match variant {
        PromptVariant::Detailed => detailed_prompt(job_title, count, category),
        PromptVariant::Simplified => simplified_prompt(job_title, count, category),
    }
}

pub fn detailed_prompt(job_title: &str, count: usize, category: QuestionCategory) -> String {
    let CategoryFocus {
        focus,
        instruction,
        type_hint,
    } = category_focus(category);

    format!(
        r#"You are an expert technical interviewer with deep knowledge of {job_title} roles.

Task: Generate {count} high-quality, realistic interview questions for a {job_title} position.
Focus on {focus}.

{instruction}

Include a range of difficulty levels (1-5 scale) where:
- Level 1: Entry-level/basic knowledge questions
- Level 3: Mid-level experience questions
- Level 5: Senior/expert level questions

Format your response as a well-formed JSON array ONLY with this structure:
[
  {{
    "question": "Your detailed question here...",
    "type": "{type_hint}",
    "difficulty": number between 1-5,
    "tags": "comma,separated,relevant,keywords"
  }}
]

Do not include any explanations, markdown formatting, or additional text outside of the JSON array.
"#
    )
}

/// Minimal fallback prompt, used when the detailed one under-produces.
pub fn simplified_prompt(job_title: &str, count: usize, category: QuestionCategory) -> String {
    // A concrete example type parses better than "technical or behavioral".
    let example_type = category
        .fixed_type()
        .map(|t| t.as_str())
        .unwrap_or("technical");

    format!(
        r#"Generate {count} interview questions for a {job_title} position. Make them {category} questions. Return ONLY a valid JSON array like this:
[{{"question": "Question text here", "type": "{example_type}", "difficulty": 3, "tags": "relevant,tags"}}]
"#
    )
}
