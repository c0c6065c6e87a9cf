//! Command parsing and dispatch for the interactive session.

use anyhow::{anyhow, bail, Result};

use crate::render;
use crate::state::Session;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Board,
    Progress,
    Reserve { id: u32, name: String, phone: String },
    Login { email: String, password: String },
    Logout,
    Panel,
    Approve(u32),
    Reject(u32),
    Reset(u32),
    Stats,
    Pix(String),
    Dump,
    Help,
    Quit,
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

const HELP: &str = "\
Comandos públicos:
  board                          grade de bilhetes
  progress                       progresso das vendas
  reserve <id> <nome> <telefone> reservar um bilhete disponível
  login <email> <senha>          entrar como admin
  help | quit

Comandos de admin:
  panel                          tabela completa (status reais)
  approve <id> | reject <id> | reset <id>
  stats                          contadores do painel
  pix <chave>                    atualizar chave PIX
  dump                           snapshot JSON do pool
  logout
";

impl Command {
    /// Parse a whitespace-separated input line.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let parse_id = |s: &str| {
            s.parse::<u32>()
                .map_err(|_| anyhow!("invalid ticket id: {:?}", s))
        };

        match tokens.as_slice() {
            [] => bail!("empty command"),
            ["board"] => Ok(Command::Board),
            ["progress"] => Ok(Command::Progress),
            ["reserve", id, middle @ .., phone] if !middle.is_empty() => Ok(Command::Reserve {
                id: parse_id(id)?,
                name: middle.join(" "),
                phone: phone.to_string(),
            }),
            ["reserve", ..] => bail!("usage: reserve <id> <nome> <telefone>"),
            ["login", email, password] => Ok(Command::Login {
                email: email.to_string(),
                password: password.to_string(),
            }),
            ["login", ..] => bail!("usage: login <email> <senha>"),
            ["logout"] => Ok(Command::Logout),
            ["panel"] => Ok(Command::Panel),
            ["approve", id] => Ok(Command::Approve(parse_id(id)?)),
            ["reject", id] => Ok(Command::Reject(parse_id(id)?)),
            ["reset", id] => Ok(Command::Reset(parse_id(id)?)),
            ["stats"] => Ok(Command::Stats),
            ["pix", key] => Ok(Command::Pix(key.to_string())),
            ["dump"] => Ok(Command::Dump),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            [other, ..] => bail!("unknown command: {:?} (try \"help\")", other),
        }
    }

    /// Run the command against the session.
    pub fn execute(self, session: &mut Session) -> Result<Outcome> {
        let output = match self {
            Command::Board => render::board(session.pool()),
            Command::Progress => render::progress(session.pool()),
            Command::Reserve { id, name, phone } => {
                let ticket = session.reserve(id, &name, &phone)?;
                let ticket_name = ticket.name.clone();
                format!(
                    "Bilhete #{:02} {:?} reservado para {}.\n\
                     Pague via PIX: {}\nQR code: {}\n\
                     A reserva será confirmada pelo organizador após o pagamento.\n",
                    id,
                    ticket_name,
                    name,
                    session.pix_key(),
                    session.payment_qr_url()
                )
            }
            Command::Login { email, password } => {
                let identity = session.login(&email, &password)?;
                format!("Login ok ({})\n", identity.user_id)
            }
            Command::Logout => {
                session.logout();
                "Logout ok\n".to_string()
            }
            Command::Panel => {
                session.stats()?; // admin gate
                render::panel(session.pool())
            }
            Command::Approve(id) => {
                session.approve(id)?;
                format!("Venda do bilhete #{:02} aprovada.\n", id)
            }
            Command::Reject(id) => {
                session.reject(id)?;
                format!("Reserva do bilhete #{:02} rejeitada.\n", id)
            }
            Command::Reset(id) => {
                session.reset(id)?;
                format!("Bilhete #{:02} liberado.\n", id)
            }
            Command::Stats => render::stats(&session.stats()?),
            Command::Pix(key) => {
                session.update_pix_key(&key)?;
                "Chave PIX atualizada.\n".to_string()
            }
            Command::Dump => {
                let mut dump = session.dump()?;
                dump.push('\n');
                dump
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rifa_core::testing::seeded_rng;
    use rifa_core::{AuthConfig, AuthMethod, Config};

    fn session() -> Session {
        let config = Config {
            auth: AuthConfig {
                method: AuthMethod::None,
                email: None,
                password: None,
            },
            raffle: Default::default(),
            payment: Default::default(),
        };
        Session::with_rng(&config, seeded_rng(9)).unwrap()
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("board").unwrap(), Command::Board);
        assert_eq!(Command::parse("  quit ").unwrap(), Command::Quit);
        assert_eq!(Command::parse("approve 7").unwrap(), Command::Approve(7));
    }

    #[test]
    fn test_parse_reserve_with_multi_word_name() {
        let cmd = Command::parse("reserve 7 Ana Maria +5511999990000").unwrap();
        assert_eq!(
            cmd,
            Command::Reserve {
                id: 7,
                name: "Ana Maria".to_string(),
                phone: "+5511999990000".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("reserve 7").is_err());
        assert!(Command::parse("approve sete").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_execute_reserve_shows_payment_info() {
        let mut session = session();
        let id = session
            .pool()
            .tickets()
            .iter()
            .find(|t| t.is_available())
            .unwrap()
            .id;

        let cmd = Command::parse(&format!("reserve {} Ana +55", id)).unwrap();
        match cmd.execute(&mut session).unwrap() {
            Outcome::Continue(out) => {
                assert!(out.contains("PIX"));
                assert!(out.contains("qrserver.com"));
            }
            Outcome::Quit => panic!("reserve must not quit"),
        }
    }

    #[test]
    fn test_execute_admin_command_without_login_fails() {
        let mut session = session();
        assert!(Command::Stats.execute(&mut session).is_err());
        assert!(Command::Panel.execute(&mut session).is_err());
    }

    #[test]
    fn test_execute_quit() {
        let mut session = session();
        assert_eq!(Command::Quit.execute(&mut session).unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_full_admin_flow_through_commands() {
        let mut session = session();
        let id = session
            .pool()
            .tickets()
            .iter()
            .find(|t| t.is_available())
            .unwrap()
            .id;

        Command::parse(&format!("reserve {} Ana +55", id))
            .unwrap()
            .execute(&mut session)
            .unwrap();
        Command::parse("login a b")
            .unwrap()
            .execute(&mut session)
            .unwrap();
        Command::parse(&format!("approve {}", id))
            .unwrap()
            .execute(&mut session)
            .unwrap();

        match Command::Stats.execute(&mut session).unwrap() {
            Outcome::Continue(out) => assert!(out.contains("vendas reais: 1")),
            Outcome::Quit => panic!("stats must not quit"),
        }
    }
}
