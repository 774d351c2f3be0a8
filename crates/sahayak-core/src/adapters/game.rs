use sahayak_types::models::{Game, GameRequest, GameResult, GameType};
use sahayak_types::{ClassifiedError, UseCase};
use serde_json::Value;
use tracing::Instrument;

use super::{request_span, Orchestrator};
use crate::classify::classify_output;

const REQUIRED: &[&str] = &["title", "instructions", "content"];

impl Orchestrator {
    pub async fn generate_game(&self, req: &GameRequest) -> Result<GameResult, ClassifiedError> {
        let use_case = UseCase::GameGenerator;
        async {
            tracing::info!(game_type = ?req.game_type, grade = %req.grade_level, "Generating game");
            let request = self.prompts().game(req);
            let game: Game = self.complete_structured(use_case, &request, REQUIRED).await?;
            check_game_content(req.game_type, &game)?;
            Ok(GameResult { game })
        }
        .instrument(request_span(use_case))
        .await
    }
}

/// Quiz rendering iterates `content.questions`; other game types are free-form.
fn check_game_content(game_type: GameType, game: &Game) -> Result<(), ClassifiedError> {
    if game_type == GameType::Quiz && !game.content.get("questions").is_some_and(Value::is_array) {
        return Err(classify_output("quiz content has no `questions` array"));
    }
    Ok(())
}
