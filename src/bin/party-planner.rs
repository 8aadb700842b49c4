use std::io::{stdin, stdout, BufRead, Write};

use minidom::Element;

use party_planner::client::Client;
use party_planner::traits::Ui;
use party_planner::utils::{print_outline, to_markup};
use party_planner::{App, Intent, PartyForm};

const HELP: &str = "Commands: select <id> | delete | new | show | markup | help | quit";

/// A UI host that prints the page on the terminal
#[derive(Default)]
struct TerminalUi {
    page: Option<Element>,
}

impl TerminalUi {
    fn show(&self) {
        let page = match &self.page {
            None => return,
            Some(page) => page,
        };
        let mut out = stdout();
        if let Err(err) = print_outline(page, &mut out) {
            log::warn!("Unable to print the page: {}", err);
        }
        if let Err(err) = out.flush() {
            log::warn!("Unable to flush stdout: {}", err);
        }
    }

    /// Prints the page as XHTML markup
    fn show_markup(&self) {
        let page = match &self.page {
            None => return,
            Some(page) => page,
        };
        match to_markup(page) {
            Ok(markup) => println!("{}", markup),
            Err(err) => log::warn!("Unable to serialize the page: {}", err),
        }
    }
}

impl Ui for TerminalUi {
    fn alert(&mut self, message: &str) {
        eprintln!("!! {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        let answer = prompt(&format!("{} [y/N]", message)).unwrap_or_default();
        matches!(answer.trim(), "y" | "Y" | "yes")
    }

    fn mount(&mut self, root: Element) {
        self.page = Some(root);
    }
}

/// Ask something to the user. Returns `None` when stdin is closed
fn prompt(question: &str) -> Option<String> {
    print!("{} ", question);
    if let Err(err) = stdout().flush() {
        log::warn!("Unable to flush stdout: {}", err);
    }

    let mut line = String::new();
    match stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
    }
}

fn read_form() -> Option<PartyForm> {
    Some(PartyForm {
        name: prompt("Name:")?,
        description: prompt("Description:")?,
        date: prompt("Date (YYYY-MM-DD):")?,
        location: prompt("Location:")?,
    })
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let client = match Client::with_default_endpoint() {
        Ok(client) => client,
        Err(err) => {
            log::error!("Invalid API endpoint: {}", err);
            return;
        },
    };
    log::info!("Using API endpoint {}", client.resource());

    let mut app = App::new(client, TerminalUi::default());
    app.initialize().await;
    app.ui().show();
    println!("{}", HELP);

    loop {
        let line = match prompt(">") {
            None => break,
            Some(line) => line,
        };
        let mut words = line.split_whitespace();

        let intent = match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("quit"), _) | (Some("exit"), _) => break,
            (Some("help"), _) => { println!("{}", HELP); continue },
            (Some("show"), _) => { app.ui().show(); continue },
            (Some("markup"), _) => { app.ui().show_markup(); continue },
            (Some("select"), Some(id)) => match id.parse() {
                Ok(id) => Intent::SelectParty(id),
                Err(_) => { eprintln!("Invalid party id {:?}", id); continue },
            },
            (Some("delete"), _) => Intent::DeleteParty,
            (Some("new"), _) => match read_form() {
                None => break,
                Some(form) => Intent::CreateParty(form),
            },
            _ => { println!("{}", HELP); continue },
        };

        app.dispatch(intent).await;
        app.ui().show();
    }
}
