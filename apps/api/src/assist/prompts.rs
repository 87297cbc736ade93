// LLM prompt constants for domain detection and CV optimization.
// Placeholders in `{braces}` are filled with `str::replace` before sending.

/// System prompt for domain detection. The reply must be a bare label.
pub const DOMAIN_DETECT_SYSTEM: &str = "You are a recruiting analyst who classifies job descriptions. \
    Respond with a single category name only. \
    Do NOT include punctuation, explanations or apologies.";

/// Domain detection prompt. Replace `{domains}` and `{jd_text}` before sending.
pub const DOMAIN_DETECT_PROMPT_TEMPLATE: &str = r#"Based on the following job description, which of these categories does it best fit into?
Categories: {domains}

Respond with ONLY the single most relevant category name from the list above.

Job Description:
---
{jd_text}
---"#;

/// System prompt for CV optimization. The reply is the rewritten CV itself.
pub const CV_OPTIMIZE_SYSTEM: &str = "You are a professional CV optimization expert \
    specializing in ATS (Applicant Tracking System) optimization. \
    You never invent experience, employers, dates, degrees or skills.";

/// CV optimization prompt. Replace `{jd_text}` and `{cv_text}` before sending.
pub const CV_OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Please analyze and optimize the following CV for the given job description.

JOB DESCRIPTION:
---
{jd_text}
---

CURRENT CV:
---
{cv_text}
---

Provide an optimized version of the CV that keeps the candidate's authentic experience while improving ATS compatibility.
Focus on the following:
1. Keyword Optimization: integrate relevant keywords from the job description where the CV supports them.
2. Structure & Readability: improve the structure for clarity and impact. Use bullet points effectively.
3. Quantified Achievements: rephrase responsibilities into quantified, results-oriented achievements where possible.
4. Tone & Professionalism: keep a professional tone suitable for the target role.
5. Truthfulness: do NOT fabricate experience or skills. Enhance the presentation of existing information.
6. Highlighting Skills: make sure critical skills from the job description that the candidate has are easy to find.

Return ONLY the full, optimized CV content, formatted professionally. Do not include any introductory text, preamble, or explanation before or after the CV content."#;
