// Resume analysis prompt templates.
// The user template is a stable contract for anyone parsing the reply downstream;
// edit the wording only together with those consumers.

pub const ANALYSIS_SYSTEM: &str =
    "You are an expert HR professional. Provide concise, actionable resume feedback.";

pub const ANALYSIS_PROMPT_TEMPLATE: &str = "Analyze this resume against the job description. Be concise.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}

Provide:
1. Match Score (1-10) with brief reason
2. Top 3 Strengths
3. Top 3 Gaps
4. Top 3 Specific Improvements
5. 5 Keywords to Add
6. Top 3 Priority Actions";

/// Interpolates both documents into the analysis template.
pub fn build_resume_prompt(job_description: &str, resume_text: &str) -> String {
    // Single pass so placeholder-like text inside the documents is left alone.
    let (head, rest) = ANALYSIS_PROMPT_TEMPLATE
        .split_once("{job_description}")
        .unwrap_or((ANALYSIS_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{resume}").unwrap_or((rest, ""));

    let mut prompt = String::with_capacity(
        ANALYSIS_PROMPT_TEMPLATE.len() + job_description.len() + resume_text.len(),
    );
    prompt.push_str(head);
    prompt.push_str(job_description);
    prompt.push_str(middle);
    prompt.push_str(resume_text);
    prompt.push_str(tail);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_places_documents_under_headers() {
        let prompt = build_resume_prompt("Job needs Python", "I know Python");
        assert!(prompt.starts_with("Analyze this resume against the job description. Be concise.\n\n"));
        assert!(prompt.contains("JOB DESCRIPTION:\nJob needs Python\n\nRESUME:\nI know Python\n\nProvide:\n"));
    }

    #[test]
    fn test_prompt_lists_six_sections() {
        let prompt = build_resume_prompt("jd", "cv");
        let items: Vec<&str> = prompt
            .lines()
            .skip_while(|l| *l != "Provide:")
            .skip(1)
            .collect();
        assert_eq!(
            items,
            vec![
                "1. Match Score (1-10) with brief reason",
                "2. Top 3 Strengths",
                "3. Top 3 Gaps",
                "4. Top 3 Specific Improvements",
                "5. 5 Keywords to Add",
                "6. Top 3 Priority Actions",
            ]
        );
    }

    #[test]
    fn test_placeholder_text_in_documents_is_not_expanded() {
        let prompt = build_resume_prompt("mentions {resume} literally", "cv body");
        assert!(prompt.contains("JOB DESCRIPTION:\nmentions {resume} literally\n"));
        assert!(prompt.contains("RESUME:\ncv body\n"));
    }

    #[test]
    fn test_empty_documents_keep_template_shape() {
        let prompt = build_resume_prompt("", "");
        assert!(prompt.contains("JOB DESCRIPTION:\n\n\nRESUME:\n\n\nProvide:"));
    }
}
