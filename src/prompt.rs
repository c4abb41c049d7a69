use crate::llm::CompletionRequest;

/// Model identifier sent with every completion request.
pub const MODEL: &str = "openai/gpt-4.1-nano-2025-04-14";

/// Upper bound on generated tokens per completion.
pub const MAX_COMPLETION_TOKENS: u32 = 5000;

pub const SYSTEM_PROMPT: &str = "You are an expert AI classroom observer specialized in educational psychology and student engagement analysis. Your task is to analyze classroom images and provide detailed, structured feedback in precise JSON format. Be objective, accurate, and focus on actionable insights. Always return valid JSON with no additional text or explanations outside the JSON structure.";

/// The analysis task specification attached to every image. The relay never
/// validates that the model actually honors this schema; the output is passed
/// through to the caller as-is.
pub const ANALYSIS_INSTRUCTIONS: &str = r#"
You are an intelligent classroom assistant.

I am giving you the URL of a classroom image. Your task is to analyze the image and return a single JSON response containing the following:

Carefully detect and number all visible students from left to right based on their seating position. Include all students, even if partially visible.

For each student, analyze:
- Facial expression
- Emotional state
- Engagement level (1 to 10)
- Whether they need additional attention
- A short observation (notes)

Also, include a classroom summary with:
- totalStudents: Total number of students detected
- averageEngagement: Average engagement score
- dominantMood: One of ["engaged", "distracted", "confused", "tired", "motivated"]
- engagementPercentage: Percentage of students with engagementLevel > 6
- attentiveCount: Number of students with engagementLevel > 6
- distractedCount: Number of students with engagementLevel ≤ 6

Additionally, include a teacherFeedbackReport object that summarizes and gives suggestions based on the data. It should have:

- overallSummary: General emotional tone and engagement of the class
- attentionNeeded: IDs of students needing support with a short reason for each
- teachingStrategies: 2–3 strategies to improve engagement and participation
- followUpRecommendations: Actions for students showing sadness, confusion, or fatigue
- teachingEffectiveness: Short evaluation of the teacher's performance based on class dynamics

The final output should be a single JSON object with the following structure:

{
  "students": [...],
  "classroomSummary": { ... },
  "teacherFeedbackReport": {
    "overallSummary": "...",
    "attentionNeeded": [ { "id": ..., "reason": "..." }, ... ],
    "teachingStrategies": [ "...", "..." ],
    "followUpRecommendations": [ "...", "..." ],
    "teachingEffectiveness": "..."
  }
}
"#;

/// Builds the outbound completion request for one classroom image. Everything
/// except the image URL is constant across requests.
pub fn analysis_request(image_url: &str) -> CompletionRequest {
    CompletionRequest {
        model: MODEL.to_string(),
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_text: ANALYSIS_INSTRUCTIONS.to_string(),
        image_url: image_url.to_string(),
        max_tokens: MAX_COMPLETION_TOKENS,
    }
}
