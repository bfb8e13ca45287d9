//! CLI argument definitions for the chain catalog.

use std::path::PathBuf;

use chainhub_model::{ChainStyle, Metal};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chainhub",
    version,
    about = "Wholesale chain catalog - search SKUs, check MOQ pricing, send inquiries",
    long_about = "Browse the B2B wholesale chain catalog from the terminal.\n\n\
                  Search SKUs, open a SKU detail view, move the MOQ selector to see\n\
                  tier discounts, and fill in the wholesale inquiry form.\n\
                  Inquiries are acknowledged locally; no backend is contacted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Catalog file (.toml or .csv) to use instead of the builtin table.
    ///
    /// Falls back to the CHAINHUB_CATALOG environment variable.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Include contact names and phone numbers in log output.
    #[arg(long = "log-contact", global = true)]
    pub log_contact: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search SKUs by name or id.
    Search(SearchArgs),

    /// Show the detail view for one SKU.
    Show(ShowArgs),

    /// Show the discount and price index for an MOQ.
    Pricing(PricingArgs),

    /// Fill in the wholesale inquiry form.
    Inquire(InquireArgs),

    /// Request a quick wholesale quote for one SKU.
    Quote(QuoteArgs),

    /// Show business profile, contact links, order process and FAQ.
    Info(InfoArgs),

    /// Summarize the active catalog and check it for duplicate ids.
    Doctor(DoctorArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search text; words are joined with single spaces. Empty lists everything.
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Print matching records as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// SKU id, case-insensitive (e.g. SS-CUB-SLV-11).
    #[arg(value_name = "SKU")]
    pub sku: String,

    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct PricingArgs {
    /// Requested MOQ in pieces. Snapped to the selector range (10-150, step 5).
    #[arg(long = "quantity", allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct InquireArgs {
    /// Company or shop name.
    #[arg(long = "company")]
    pub company: String,

    /// Your name.
    #[arg(long = "name")]
    pub name: String,

    /// Phone or WhatsApp number.
    #[arg(long = "phone")]
    pub phone: String,

    /// Pre-fill style, metal, thickness and length from a catalog SKU.
    #[arg(long = "sku", value_name = "SKU")]
    pub sku: Option<String>,

    #[arg(long = "style", value_enum)]
    pub style: Option<StyleArg>,

    #[arg(long = "metal", value_enum)]
    pub metal: Option<MetalArg>,

    /// Thickness in millimetres.
    #[arg(long = "thickness", value_name = "MM")]
    pub thickness: Option<f64>,

    /// Length in inches.
    #[arg(long = "length", value_name = "INCHES")]
    pub length: Option<u32>,

    /// Quantity in pieces.
    #[arg(long = "quantity", value_name = "PCS")]
    pub quantity: Option<u32>,

    /// Any note (finish / design / target price).
    #[arg(long = "note")]
    pub note: Option<String>,

    /// Print the acknowledgment and payload as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct QuoteArgs {
    /// SKU id, case-insensitive.
    #[arg(value_name = "SKU")]
    pub sku: String,

    /// Company or shop name.
    #[arg(long = "company")]
    pub company: String,

    /// Phone or WhatsApp number.
    #[arg(long = "phone")]
    pub phone: String,

    /// Required quantity in pieces.
    #[arg(long = "quantity", value_name = "PCS")]
    pub quantity: Option<u32>,

    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct DoctorArgs {
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI chain style choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Rope,
    Curb,
    Figaro,
    Box,
    Franco,
    Cuban,
    Wheat,
    Snake,
}

impl From<StyleArg> for ChainStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::Rope => ChainStyle::Rope,
            StyleArg::Curb => ChainStyle::Curb,
            StyleArg::Figaro => ChainStyle::Figaro,
            StyleArg::Box => ChainStyle::Box,
            StyleArg::Franco => ChainStyle::Franco,
            StyleArg::Cuban => ChainStyle::Cuban,
            StyleArg::Wheat => ChainStyle::Wheat,
            StyleArg::Snake => ChainStyle::Snake,
        }
    }
}

/// CLI metal choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MetalArg {
    Gold,
    Silver,
    RoseGold,
}

impl From<MetalArg> for Metal {
    fn from(value: MetalArg) -> Self {
        match value {
            MetalArg::Gold => Metal::Gold,
            MetalArg::Silver => Metal::Silver,
            MetalArg::RoseGold => Metal::RoseGold,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
