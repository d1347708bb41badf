//! Parsing of chat input lines.

use std::path::PathBuf;

pub(crate) const HELP: &str = "Comandos:
  <mensagem>                 fala com o Mentor
  /image <arquivo> <texto>   envia uma imagem junto com a mensagem
  /mindmap <tema>            gera um mapa mental ASCII
  /new                       nova conversa (apaga o histórico)
  /usage                     tokens usados e pontos acumulados
  /help                      esta ajuda
  /quit                      sair";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Say(String),
    SayWithImage { path: PathBuf, text: String },
    MindMap(String),
    New,
    Usage,
    Help,
    Quit,
    Empty,
}

/// Parse a line. `Err` carries a usage hint for the user.
pub(crate) fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }
    if !line.starts_with('/') {
        return Ok(Command::Say(line.to_string()));
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "/new" => Ok(Command::New),
        "/usage" => Ok(Command::Usage),
        "/help" => Ok(Command::Help),
        "/quit" | "/exit" => Ok(Command::Quit),
        "/mindmap" if !rest.is_empty() => Ok(Command::MindMap(rest.to_string())),
        "/mindmap" => Err("uso: /mindmap <tema>".into()),
        "/image" => match rest.split_once(char::is_whitespace) {
            Some((path, text)) if !text.trim().is_empty() => Ok(Command::SayWithImage {
                path: PathBuf::from(path),
                text: text.trim().to_string(),
            }),
            _ => Err("uso: /image <arquivo> <mensagem>".into()),
        },
        other => Err(format!("comando desconhecido: {other} (veja /help)")),
    }
}
