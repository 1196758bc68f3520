use acuity_core::{
    calculate_severity_score, normal_range_label, severity_trend_with_threshold,
    validate_trend_threshold, validate_vital_signs, vitals_report, AcuityResult, Trend,
    VitalKind, VitalSigns, DEFAULT_TREND_THRESHOLD, NORMAL_RANGES,
};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "acuity")]
#[command(about = "Clinical severity scoring from vital signs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the severity score
    Score(VitalArgs),
    /// Check readings against plausible instrument ranges
    Validate(VitalArgs),
    /// Severity, validation and per-vital deviations in one report
    Report(VitalArgs),
    /// Compare two severity scores
    Trend {
        /// Earlier severity score
        previous: f64,
        /// Latest severity score
        current: f64,
        /// Minimum change that counts as improving or worsening
        #[arg(long, default_value_t = DEFAULT_TREND_THRESHOLD)]
        threshold: f64,
    },
    /// List the normal range of every vital sign, or of one
    Ranges {
        /// Vital key such as `heartRate` or `bp_systolic`
        vital: Option<VitalKind>,
    },
}

#[derive(Args, Debug, Default)]
struct VitalArgs {
    /// Heart rate (bpm)
    #[arg(long, allow_negative_numbers = true)]
    heart_rate: Option<f64>,
    /// Oxygen saturation (%)
    #[arg(long, allow_negative_numbers = true)]
    spo2: Option<f64>,
    /// Respiratory rate (breaths/min)
    #[arg(long, allow_negative_numbers = true)]
    resp_rate: Option<f64>,
    /// Temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,
    /// Systolic blood pressure (mmHg)
    #[arg(long, allow_negative_numbers = true)]
    bp_systolic: Option<f64>,
    /// Diastolic blood pressure (mmHg)
    #[arg(long, allow_negative_numbers = true)]
    bp_diastolic: Option<f64>,
    /// Read vitals from a JSON file, or '-' for stdin. Flags override values from the file.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

impl VitalArgs {
    fn into_vitals(self) -> Result<VitalSigns, Box<dyn std::error::Error>> {
        let mut vitals: VitalSigns = match &self.json {
            Some(path) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                serde_json::from_str(&buf)?
            }
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => VitalSigns::default(),
        };

        let flags = [
            (VitalKind::HeartRate, self.heart_rate),
            (VitalKind::Spo2, self.spo2),
            (VitalKind::RespRate, self.resp_rate),
            (VitalKind::Temperature, self.temperature),
            (VitalKind::BpSystolic, self.bp_systolic),
            (VitalKind::BpDiastolic, self.bp_diastolic),
        ];
        for (kind, value) in flags {
            if value.is_some() {
                vitals.set(kind, value);
            }
        }

        Ok(vitals)
    }
}

fn compare_scores(previous: f64, current: f64, threshold: f64) -> AcuityResult<Trend> {
    let threshold = validate_trend_threshold(threshold)?;
    Ok(severity_trend_with_threshold(previous, current, threshold))
}

fn range_lines(vital: Option<VitalKind>) -> Vec<String> {
    NORMAL_RANGES
        .iter()
        .filter(|(kind, _)| vital.is_none_or(|v| v == *kind))
        .map(|(kind, range)| {
            format!("{:<12} {:<17} {}", kind.key(), range.label, normal_range_label(*kind))
        })
        .collect()
}

fn print_json(value: &impl serde::Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Score(args)) => {
            let vitals = args.into_vitals()?;
            print_json(&calculate_severity_score(&vitals))?;
        }
        Some(Commands::Validate(args)) => {
            let vitals = args.into_vitals()?;
            let result = validate_vital_signs(&vitals);
            print_json(&result)?;
            if !result.valid {
                std::process::exit(1);
            }
        }
        Some(Commands::Report(args)) => {
            let vitals = args.into_vitals()?;
            print_json(&vitals_report(&vitals))?;
        }
        Some(Commands::Trend {
            previous,
            current,
            threshold,
        }) => {
            let trend = compare_scores(previous, current, threshold)?;
            println!("{trend}");
        }
        Some(Commands::Ranges { vital }) => {
            for line in range_lines(vital) {
                println!("{line}");
            }
        }
        None => {
            println!("Use 'acuity --help' for commands");
        }
    }

    Ok(())
}
