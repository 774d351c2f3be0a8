//! Instruction templates, one per use case.
//!
//! Structured templates always end with [`JSON_ONLY`].

use sahayak_types::models::GameType;

pub const JSON_ONLY: &str = "Respond with ONLY the JSON object, no additional text.";

pub fn content(prompt: &str, language: &str) -> String {
    format!(
        "You are a helpful teaching assistant for teachers in India. Generate educational content in {language}.\n\n\
         {prompt}\n\n\
         Please provide clear, culturally relevant, and engaging content suitable for students in rural Indian schools."
    )
}

fn game_brief(topic: &str, grade_level: &str, game_type: GameType) -> String {
    match game_type {
        GameType::Quiz => format!(
            "Create a fun quiz game about {topic} for Grade {grade_level}. Include 10 multiple choice questions \
             with 4 options each and correct answers. Make it engaging and educational. Put the questions in \
             a \"questions\" array inside \"content\"."
        ),
        GameType::Matching => format!(
            "Create a matching game about {topic} for Grade {grade_level}. Provide 10 pairs of items to match \
             (e.g., terms and definitions, questions and answers). Make it culturally relevant for Indian students."
        ),
        GameType::WordSearch => format!(
            "Create a word search puzzle about {topic} for Grade {grade_level}. Provide 15 key words related to \
             the topic and brief descriptions. Include hints for each word."
        ),
        GameType::FillBlanks => format!(
            "Create a fill-in-the-blanks game about {topic} for Grade {grade_level}. Provide 10 sentences with \
             blanks and word banks. Make it educational and fun."
        ),
    }
}

pub fn game(topic: &str, grade_level: &str, game_type: GameType) -> String {
    format!(
        "{brief}\n\n\
         Format as JSON:\n\
         {{\n  \"title\": \"Game title\",\n  \"instructions\": \"How to play the game\",\n  \
         \"content\": {{ }}\n}}\n\n\
         \"content\" holds the game-specific data (questions, pairs, words, etc.).\n\n\
         {JSON_ONLY}",
        brief = game_brief(topic, grade_level, game_type),
    )
}

pub fn explanation(question: &str, language: &str) -> String {
    format!(
        "You are a helpful teaching assistant. Answer this student's question in {language} in a simple, clear way \
         that's easy for children to understand. Use analogies and examples from everyday life in rural India.\n\n\
         Question: {question}\n\n\
         Provide a clear explanation with simple examples and analogies that students can relate to."
    )
}

pub fn lesson_plan(subject: &str, grades: &str, topics: &str) -> String {
    format!(
        "You are an expert lesson planner for multi-grade classrooms in rural India. Create a detailed weekly lesson plan.\n\n\
         Subject: {subject}\n\
         Grade Levels: {grades}\n\
         Topics to Cover: {topics}\n\n\
         Create a weekly plan (Monday-Friday) with:\n\
         - Specific activities for each day\n\
         - Time duration for each activity\n\
         - Differentiation strategies for different grade levels\n\
         - Practical, low-resource activities suitable for rural classrooms\n\n\
         Format the response as JSON with this structure:\n\
         {{\n  \"week\": \"Week 1\",\n  \"days\": [\n    {{\n      \"day\": \"Monday\",\n      \
         \"activity\": \"activity description\",\n      \"duration\": \"45 min\",\n      \
         \"notes\": \"differentiation notes\"\n    }}\n  ]\n}}\n\n\
         {JSON_ONLY}"
    )
}

pub fn worksheet() -> String {
    format!(
        "Analyze this textbook page and create 3 differentiated worksheet versions for different grade levels \
         in a multi-grade classroom:\n\n\
         1. Basic Level (Grades 1-2): Simplified vocabulary, basic concepts, visual aids\n\
         2. Intermediate Level (Grades 3-4): Standard concepts as shown in the textbook\n\
         3. Advanced Level (Grades 5-6): Extended concepts, critical thinking questions\n\n\
         For each level, provide:\n\
         - Grade range\n\
         - Difficulty level\n\
         - Detailed description of adaptations\n\
         - 3-5 specific questions or activities\n\n\
         Format as JSON:\n\
         {{\n  \"worksheets\": [\n    {{\n      \"grade\": \"Grade 1-2\",\n      \"difficulty\": \"Basic\",\n      \
         \"description\": \"description\",\n      \"activities\": [\"activity1\", \"activity2\", \"activity3\"]\n    \
         }}\n  ]\n}}\n\n\
         {JSON_ONLY}"
    )
}

pub fn visual_aid(description: &str) -> String {
    format!(
        "Generate a simple, clear educational diagram or visual aid based on this description: {description}\n\n\
         The image should be:\n\
         - Simple line drawing style, suitable for blackboard copying\n\
         - Clear and easy to understand\n\
         - Educational and appropriate for students\n\
         - Black and white or minimal colors\n\n\
         Please generate an image that matches this description."
    )
}

pub const TRANSCRIPTION: &str = "Transcribe this audio accurately. Return ONLY the transcribed text, nothing else.";

pub fn reading_analysis(expected_text: &str, transcription: &str) -> String {
    format!(
        "You are an expert reading teacher. Compare the expected text with the student's reading transcription \
         and provide a detailed assessment.\n\n\
         Expected Text:\n{expected_text}\n\n\
         Student's Transcription:\n{transcription}\n\n\
         Provide a detailed assessment in JSON format:\n\
         {{\n  \"fluency_score\": <number 1-10>,\n  \"accuracy_analysis\": \"<detailed analysis of accuracy>\",\n  \
         \"mistakes\": [\"<specific mistake 1>\", \"<specific mistake 2>\"],\n  \
         \"suggestions\": [\"<improvement suggestion 1>\", \"<improvement suggestion 2>\"],\n  \
         \"overall_feedback\": \"<encouraging feedback with specific praise and areas for improvement>\"\n}}\n\n\
         {JSON_ONLY}"
    )
}
