use clap::Parser;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uridoki::cli::commands::{Cli, Commands};
use uridoki::config::Config;
use uridoki::domain::entities::backtest::BacktestRequest;
use uridoki::domain::entities::event::EventDetails;
use uridoki::domain::values::index_type::IndexType;
use uridoki::domain::values::macro_indicator::MacroPercentiles;
use uridoki::domain::values::score_ma::ScoreMa;
use uridoki::domain::values::score_zone::score_zone_text;
use uridoki::Uridoki;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uridoki=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!(api_base = %config.api_base, "configuration loaded");

    let app = Uridoki::new(&config);

    if let Err(e) = run_command(app, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(app: Uridoki, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Assess { score } => {
            let assessment = app.assess(score);
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Commands::Zone { score } => {
            println!("{}", score_zone_text(score));
        }
        Commands::Indices => {
            for idx in IndexType::ALL {
                println!("{}\t{}\t{}", idx.wire_name(), idx.label(), idx.price_title());
            }
        }
        Commands::Lenses { active } => {
            let active: Option<ScoreMa> = active
                .map(|a| a.parse())
                .transpose()
                .map_err(|e: String| e)?;
            for ma in ScoreMa::ORDER {
                let persona = ma.persona();
                let marker = if Some(ma) == active { "*" } else { " " };
                println!(
                    "{marker} {ma}\t{} {}\t{}\t{}",
                    persona.icon, persona.label, persona.duration, persona.copy_title
                );
            }
            if let Some(ma) = active {
                println!("\n{}\nprogress: {:.0}%", ma.persona().copy_body, ma.progress_pct());
            }
            let avatar = ScoreMa::avatar_lens(active);
            println!("avatar: {} ({})", avatar.avatar_sprite(), avatar.avatar_alt());
        }
        Commands::Macro { json } => {
            let details: Option<MacroPercentiles> =
                json.map(|j| serde_json::from_str(&j)).transpose()?;
            let cards = app.macro_cards(details.as_ref());
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        Commands::Events { json } => {
            let details: Option<EventDetails> =
                json.map(|j| serde_json::from_str(&j)).transpose()?;
            let adjustment = details.as_ref().map(|d| d.e_adj).unwrap_or(0.0);
            println!("重要イベント (補正: {adjustment})");
            for event in app.events(details.as_ref()) {
                println!(
                    "- {}\t日付: {}\t重要度: {}",
                    event.name,
                    event.display_jst(),
                    event.importance
                );
            }
        }
        Commands::Backtest {
            start,
            end,
            cash,
            sell,
            buy,
            index,
            ma,
        } => {
            let mut request = BacktestRequest::new(parse_date(&start)?, parse_date(&end)?, cash);
            request.sell_threshold = sell;
            request.buy_threshold = buy;
            request.index_type = index.parse().map_err(|e: String| e)?;
            request.score_ma = ma.parse().map_err(|e: String| e)?;

            let result = app.run_backtest(&request).await?;
            let excess_return = result.excess_return();
            let beat_buy_and_hold = result.beat_buy_and_hold();
            let output = json!({
                "result": result,
                "excess_return": excess_return,
                "beat_buy_and_hold": beat_buy_and_hold,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format: {s}. Use YYYY-MM-DD"))
}
