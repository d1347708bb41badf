//! Interactive chat loop on stdin/stdout.

use std::io::Write;

use mentor_ai::mentor::prompts::INITIAL_GREETING;
use mentor_ai::{extract_achievements, Achievement, InlineImage, Mentor};
use mentor_common::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::command::{self, Command, HELP};
use crate::image::load_image;

/// Points earned from achievement tags during this process.
#[derive(Debug, Default)]
pub(crate) struct Score {
    points: u32,
    unlocked: usize,
}

impl Score {
    /// Add achievements and return the points gained.
    pub(crate) fn record(&mut self, achievements: &[Achievement]) -> u32 {
        let gained: u32 = achievements.iter().map(Achievement::points).sum();
        self.points = self.points.saturating_add(gained);
        self.unlocked += achievements.len();
        gained
    }

    pub(crate) fn points(&self) -> u32 {
        self.points
    }
}

/// Read commands until EOF or `/quit`.
pub(crate) async fn run(mut mentor: Mentor) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut score = Score::default();

    println!("{INITIAL_GREETING}\n");
    if !mentor.is_connected() {
        info!("no API key resolved; running disconnected");
    }

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match command::parse(&line) {
            Ok(Command::Empty) => continue,
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::New) => {
                mentor.reset_session();
                println!("{INITIAL_GREETING}\n");
            }
            Ok(Command::Usage) => println!("{}", usage_report(&mentor, &score)),
            Ok(Command::MindMap(topic)) => match mentor.generate_mind_map(&topic).await {
                Some(map) => println!("{map}\n"),
                None => println!("⚠️ Não foi possível gerar o mapa mental agora.\n"),
            },
            Ok(Command::Say(text)) => reply(&mut mentor, &mut score, &text, None).await,
            Ok(Command::SayWithImage { path, text }) => match load_image(&path).await {
                Ok(image) => reply(&mut mentor, &mut score, &text, Some(image)).await,
                Err(e) => println!("⚠️ {e}\n"),
            },
            Err(hint) => println!("{hint}"),
        }
    }

    debug!(points = score.points(), "chat loop finished");
    Ok(())
}

async fn reply(mentor: &mut Mentor, score: &mut Score, text: &str, image: Option<InlineImage>) {
    let raw = mentor.send_message(text, image).await;
    let (visible, achievements) = extract_achievements(&raw);
    println!("{visible}\n");

    let gained = score.record(&achievements);
    if gained > 0 {
        println!("🏆 +{gained} pontos (total: {})\n", score.points());
    }
}

fn usage_report(mentor: &Mentor, score: &Score) -> String {
    let conversation = match mentor.session() {
        Some(session) => {
            let usage = session.tracker().total();
            let generation = session.generation();
            let cap = generation
                .max_output_tokens
                .map_or_else(|| "sem limite".to_string(), |n| n.to_string());
            format!(
                "Conversa {}: {} turnos, {} tokens de entrada, {} de saída.\n\
                 Temperatura {}, limite de {} tokens por resposta.",
                session.id(),
                session.turn_count(),
                usage.input_tokens,
                usage.output_tokens,
                generation.temperature,
                cap
            )
        }
        None => "Nenhuma conversa ativa.".to_string(),
    };
    format!(
        "{conversation}\nPontos: {} ({} conquistas).\n",
        score.points(),
        score.unlocked
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mentor_ai::{
        AiClient, AiError, AiResponse, ClientFactory, GenerateRequest, MentorSettings, TokenUsage,
    };

    use super::*;

    struct FixedReply;

    #[async_trait]
    impl AiClient for FixedReply {
        async fn generate_content(
            &self,
            _request: &GenerateRequest,
        ) -> std::result::Result<AiResponse, AiError> {
            Ok(AiResponse {
                content: "ok".into(),
                usage: TokenUsage {
                    input_tokens: 12,
                    output_tokens: 3,
                },
            })
        }
    }

    fn connected(settings: MentorSettings) -> Mentor {
        let factory: ClientFactory = Arc::new(
            |_api_key: &str| -> std::result::Result<Arc<dyn AiClient>, AiError> {
                Ok(Arc::new(FixedReply))
            },
        );
        Mentor::with_factory(Some("key".into()), settings, factory)
    }

    #[test]
    fn score_accumulates_points() {
        let mut score = Score::default();
        assert_eq!(score.record(&[Achievement::Simple]), 10);
        assert_eq!(
            score.record(&[Achievement::Hard, Achievement::Extreme]),
            250
        );
        assert_eq!(score.points(), 260);
        assert_eq!(score.unlocked, 3);
    }

    #[test]
    fn empty_record_gains_nothing() {
        let mut score = Score::default();
        assert_eq!(score.record(&[]), 0);
        assert_eq!(score.points(), 0);
    }

    #[test]
    fn usage_without_session() {
        let mentor = connected(MentorSettings::default());
        let report = usage_report(&mentor, &Score::default());
        assert!(report.starts_with("Nenhuma conversa ativa."));
        assert!(report.contains("Pontos: 0 (0 conquistas)"));
    }

    #[tokio::test]
    async fn usage_shows_session_settings_and_tokens() {
        let mut mentor = connected(
            MentorSettings::default()
                .with_temperature(0.9)
                .with_max_output_tokens(512),
        );
        mentor.send_message("oi", None).await;

        let mut score = Score::default();
        score.record(&[Achievement::Hard]);
        let report = usage_report(&mentor, &score);

        assert!(report.contains("1 turnos, 12 tokens de entrada, 3 de saída"));
        assert!(report.contains("Temperatura 0.9, limite de 512 tokens"));
        assert!(report.contains("Pontos: 50 (1 conquistas)"));
    }
}
