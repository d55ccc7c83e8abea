use api_shared::ScoreRes;
use clap::{Parser, Subcommand};
use symptom_core::{CheckerConfig, IllnessProfile, ScoreReport, SymptomChecker};

#[derive(Parser)]
#[command(name = "symptoms")]
#[command(about = "Symptom checker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the symptom catalog
    List,
    /// List illness profiles and their symptoms
    Illnesses,
    /// Score a selection of symptoms
    Score {
        /// Symptom labels, quoted when they contain spaces
        symptoms: Vec<String>,
        /// Print the result payload as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let checker = SymptomChecker::new(CheckerConfig::reference()?);

    match cli.command {
        Some(Commands::List) => {
            for symptom in checker.catalog() {
                println!("{}", symptom);
            }
        }
        Some(Commands::Illnesses) => {
            print!("{}", render_illnesses(checker.profiles()));
        }
        Some(Commands::Score { symptoms, json }) => {
            let report = checker.score(&symptoms);
            if json {
                println!("{}", serde_json::to_string_pretty(&ScoreRes::from(report))?);
            } else {
                print!("{}", render_report(&report));
            }
        }
        None => {
            println!("Use 'symptoms --help' for commands");
        }
    }

    Ok(())
}

fn render_illnesses(profiles: &[IllnessProfile]) -> String {
    profiles
        .iter()
        .map(|p| format!("{}: {}\n", p.name, p.symptoms.join(", ")))
        .collect()
}

fn render_report(report: &ScoreReport) -> String {
    if report.is_no_selection() {
        return format!("{}\n", report.message);
    }
    if report.results.is_empty() {
        return "No illness matches the selected symptoms.\n".to_string();
    }

    let mut out = String::new();
    for r in &report.results {
        out.push_str(&format!(
            "{:<20} {} of {} ({:.1}%)\n",
            r.name, r.match_count, r.total, r.percent
        ));
    }
    out.push_str(&format!("Best match: {}\n", report.best.join(", ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_collects_quoted_symptoms() {
        let cli = Cli::try_parse_from(["symptoms", "score", "Sneezing", "Runny or stuffy nose"])
            .unwrap();
        match cli.command {
            Some(Commands::Score { symptoms, json }) => {
                assert_eq!(symptoms, vec!["Sneezing", "Runny or stuffy nose"]);
                assert!(!json);
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_score_accepts_no_symptoms_and_json_flag() {
        let cli = Cli::try_parse_from(["symptoms", "score", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Score { ref symptoms, json: true }) if symptoms.is_empty()
        ));
    }

    #[test]
    fn test_render_report_ranks_tied_matches() {
        let checker = SymptomChecker::default();
        let out = render_report(&checker.score(&["Sneezing", "Runny or stuffy nose"]));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{:<20} 2 of 4 (50.0%)", "Allergies"));
        assert_eq!(lines[1], format!("{:<20} 2 of 6 (33.3%)", "Common Cold"));
        assert_eq!(lines[2], "Best match: Common Cold, Allergies");
    }

    #[test]
    fn test_render_report_empty_selection_prints_message() {
        let empty: [&str; 0] = [];
        let out = render_report(&SymptomChecker::default().score(&empty));
        assert_eq!(out, format!("{}\n", symptom_core::NO_SYMPTOMS_MESSAGE));
    }

    #[test]
    fn test_render_report_unmatched_selection() {
        let out = render_report(&SymptomChecker::default().score(&["Rash"]));
        assert_eq!(out, "No illness matches the selected symptoms.\n");
    }

    #[test]
    fn test_render_illnesses_lists_profiles_in_table_order() {
        let out = render_illnesses(SymptomChecker::default().profiles());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[2],
            "Allergies: Sneezing, Runny or stuffy nose, Itchy or watery eyes, Sore throat"
        );
        assert!(lines[4].starts_with("COVID-like Illness: Fever, Cough"));
    }
}
