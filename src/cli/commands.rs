use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uridoki", about = "Sell/hold timing advisor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a score into a decision, alert and zone text (JSON)
    Assess {
        /// Composite 0-100 score; omit while it is still being calculated
        #[arg(long, allow_negative_numbers = true)]
        score: Option<f64>,
    },
    /// Print the zone description for a score
    Zone {
        #[arg(long, allow_negative_numbers = true)]
        score: Option<f64>,
    },
    /// List supported market indices
    Indices,
    /// List score lenses (moving-average windows)
    Lenses {
        /// Active window: 20, 60 or 200
        #[arg(long)]
        active: Option<String>,
    },
    /// Render macro percentile cards from JSON ({"p_r":..,"p_cpi":..,"p_vix":..,"M":..})
    Macro {
        json: Option<String>,
    },
    /// Show the event calendar from event_details JSON
    Events {
        json: Option<String>,
    },
    /// Run a strategy backtest on the remote service
    Backtest {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Initial cash
        #[arg(long)]
        cash: f64,
        #[arg(long, default_value = "80")]
        sell: f64,
        #[arg(long, default_value = "40")]
        buy: f64,
        /// Index (SP500, sp500_jpy, TOPIX, NIKKEI, NIFTY50, ORUKAN, orukan_jpy)
        #[arg(long, default_value = "SP500")]
        index: String,
        /// Score moving-average window: 20, 60 or 200
        #[arg(long, default_value = "200")]
        ma: String,
    },
}
