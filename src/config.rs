use crate::i18n::Language;
use crate::types::Selection;
use crate::view::LayoutOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scheme_report")]
#[command(version)]
#[command(about = "Bilingual water-supply scheme performance report")]
pub struct Args {
    /// Scheme survey table (CSV)
    #[arg(long, default_value = "data/scheme_report.csv")]
    pub schemes: PathBuf,

    /// Last-7-days water supply table (CSV)
    #[arg(long, default_value = "data/water_supply_last_7_days.csv")]
    pub supply: PathBuf,

    /// Disgruntled consumer table (CSV)
    #[arg(long, default_value = "data/disgruntled_consumers.csv")]
    pub complaints: PathBuf,

    /// Leave out the disgruntled consumer table
    #[arg(long)]
    pub no_complaints: bool,

    /// Starting language
    #[arg(long, value_enum, default_value_t = Language::Assamese)]
    pub language: Language,

    /// Compact mobile layout (no chart, no complaint table)
    #[arg(long)]
    pub mobile: bool,

    #[arg(long)]
    pub district: Option<String>,

    #[arg(long)]
    pub division: Option<String>,

    #[arg(long)]
    pub sub_division: Option<String>,

    #[arg(long)]
    pub scheme: Option<String>,

    /// Print one report for the initial selection and exit
    #[arg(long)]
    pub once: bool,

    /// Directory for exported reports
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub schemes: PathBuf,
    pub supply: PathBuf,
    pub complaints: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub paths: DataPaths,
    pub language: Language,
    pub layout: LayoutOptions,
    pub initial: Selection,
    pub once: bool,
    pub out_dir: PathBuf,
}

impl From<Args> for DashboardConfig {
    fn from(args: Args) -> Self {
        let include_complaints = !args.no_complaints;
        Self {
            paths: DataPaths {
                schemes: args.schemes,
                supply: args.supply,
                complaints: include_complaints.then_some(args.complaints),
            },
            language: args.language,
            layout: LayoutOptions {
                mobile: args.mobile,
                include_complaints,
            },
            initial: Selection {
                district: args.district,
                division: args.division,
                sub_division: args.sub_division,
                scheme_name: args.scheme,
            },
            once: args.once,
            out_dir: args.out_dir,
        }
    }
}
