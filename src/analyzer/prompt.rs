//! Prompt construction for the analysis collaborator.
//!
//! The prompts are deterministic: same text and URL in, same strings out.
//! The system message fixes the analyst persona and the exact JSON shape the
//! decoder expects; the user message carries the (capped) text under review.

/// Analysis runs on at most this many characters of input. Bounds the
/// collaborator call's cost and latency regardless of how much the extractor
/// produced. Independent of the 2000-char storage truncation.
pub const ANALYSIS_INPUT_CAP: usize = 8000;

pub const SYSTEM_PROMPT: &str = r#"You are an expert fact-checker and media analyst with extensive experience in identifying fake news, misinformation, bias, and assessing source credibility. Your task is to provide comprehensive analysis of news content.

For each analysis, evaluate:
1. FAKE NEWS DETECTION: Determine if content is real, fake, misleading, satirical, or opinion-based
2. BIAS ANALYSIS: Identify political, commercial, emotional, or other biases
3. SOURCE CREDIBILITY: Assess the reliability and reputation of the source (if URL provided)
4. EVIDENCE & REASONING: Provide specific examples and explanations

Return your analysis in the following JSON format:
{
  "fake_news_analysis": {
    "is_fake": boolean,
    "confidence_score": float (0-100),
    "classification": string ("Real News", "Fake News", "Misleading", "Satirical", "Opinion"),
    "reasoning": [list of specific reasons],
    "evidence": [list of evidence supporting the classification],
    "red_flags": [list of warning signs or suspicious elements]
  },
  "bias_analysis": {
    "bias_score": float (0-10, where 0 is neutral),
    "bias_type": string (primary type of bias detected),
    "bias_indicators": [list of specific bias indicators],
    "explanation": string (detailed explanation of bias detected)
  },
  "source_credibility": {
    "credibility_score": float (0-10),
    "credibility_factors": [list of positive credibility factors],
    "reputation_indicators": [list of reputation indicators],
    "concerns": [list of credibility concerns]
  },
  "overall_assessment": string (summary of overall findings),
  "recommendations": [list of recommendations for readers]
}

Be thorough but concise. Provide specific examples from the content to support your analysis."#;

/// Build the user message, capping the embedded text at [`ANALYSIS_INPUT_CAP`].
pub fn build_user_prompt(text: &str, source_url: Option<&str>) -> String {
    let capped: String = text.chars().take(ANALYSIS_INPUT_CAP).collect();
    format!(
        "Please analyze the following content for fake news, bias, and credibility:\n\n\
         CONTENT TO ANALYZE:\n{}\n\n\
         SOURCE URL: {}\n\n\
         Provide your analysis in the specified JSON format.",
        capped,
        source_url.unwrap_or("Not provided"),
    )
}
