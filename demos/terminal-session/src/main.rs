use betdesk::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// One line typed at the terminal.
#[derive(Debug, Clone)]
enum Command {
    Register { username: &'static str, password: &'static str, role: Role },
    LogIn { username: &'static str, password: &'static str },
    LogOut,
    PlaceBet(&'static str),
    ShowUsers,
    BanUser(&'static str),
    PrintAllBets,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register { username, role, .. } => write!(f, "register {username} as {role}"),
            Self::LogIn { username, .. } => write!(f, "login {username}"),
            Self::LogOut => write!(f, "logout"),
            Self::PlaceBet(bet) => write!(f, "bet {bet:?}"),
            Self::ShowUsers => write!(f, "show users"),
            Self::BanUser(username) => write!(f, "ban {username}"),
            Self::PrintAllBets => write!(f, "print bets"),
        }
    }
}

/// Runs one command and renders its outcome as a single line.
async fn execute(desk: &SharedBetdesk, command: &Command) -> String {
    let outcome = match command {
        Command::Register { username, password, role } => desk
            .registration(username, password, *role)
            .await
            .map(|()| "registered".to_string()),
        Command::LogIn { username, password } => desk
            .log_in(username, password)
            .await
            .map(|user| format!("welcome, {} ({})", user.username, user.role())),
        Command::LogOut => desk.log_out().await.map(|()| "bye".to_string()),
        Command::PlaceBet(description) => desk
            .place_bet(Bet::new(*description))
            .await
            .map(|()| "bet placed".to_string()),
        Command::ShowUsers => desk
            .show_users()
            .await
            .map(|names| format!("users: [{}]", names.join(", "))),
        Command::BanUser(username) => desk
            .ban_user(username)
            .await
            .map(|()| format!("{username} banned")),
        Command::PrintAllBets => desk.print_all_bets().await.map(|bets| {
            let list: Vec<String> = bets.iter().map(ToString::to_string).collect();
            format!("bets: [{}]", list.join(", "))
        }),
    };

    match outcome {
        Ok(text) => format!("> {command}: {text}"),
        Err(e) => format!("> {command}: error: {e}"),
    }
}

/// The scripted session: an admin checks the (empty) user list, a bettor
/// registers and bets twice on the same match, then the admin bans the
/// bettor, who is refused at the next login.
fn script() -> Vec<Command> {
    use Command::*;
    vec![
        Register { username: "alice", password: "pw", role: Role::Admin },
        LogIn { username: "alice", password: "pw" },
        ShowUsers,
        Register { username: "bob", password: "pw", role: Role::RegularUser },
        LogOut,
        Register { username: "bob", password: "pw", role: Role::RegularUser },
        LogIn { username: "bob", password: "pw" },
        PlaceBet("X-Y 1:0"),
        PlaceBet("X-Y 1:0"),
        PrintAllBets,
        ShowUsers,
        LogOut,
        LogIn { username: "alice", password: "pw" },
        ShowUsers,
        BanUser("bob"),
        BanUser("alice"),
        LogOut,
        LogIn { username: "bob", password: "pw" },
        LogOut,
    ]
}

async fn walkthrough(desk: &SharedBetdesk) -> Vec<String> {
    let mut transcript = Vec::new();
    for command in script() {
        transcript.push(execute(desk, &command).await);
    }
    transcript
}

/// Seed from the JSON file named on the command line, or start empty.
fn load_config() -> Result<BetdeskConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(BetdeskConfig::from_json_str(&std::fs::read_to_string(path)?)?),
        None => Ok(BetdeskConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let desk = Betdesk::builder().config(load_config()?).build_shared()?;

    for line in walkthrough(&desk).await {
        println!("{line}");
    }

    let users = desk
        .with_controller(|ctl| ctl.users().list_all())
        .await;
    println!("{}", serde_json::to_string_pretty(&users)?);
    Ok(())
}
