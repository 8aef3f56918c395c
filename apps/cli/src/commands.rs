use crate::cli::{Command, FavoritesCommand, GenerateArgs};
use anyhow::{Result, bail};
use ncraft::Platform;
use ncraft::domain::Industry;
use ncraft::domain::record::GeneratedNameRecord;
use ncraft::domain::trademark::TrademarkAssessment;
use ncraft::features::ideation::{GenerationFlow, IdeationError, IdeationRequest};
use ncraft::storage::Toggle;
use serde_json::json;
use tracing::error;

pub(crate) async fn run(platform: &Platform, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Generate(args) => generate(platform, args, json).await,
        Command::Assess { name } => {
            let assessment = platform.studio().classifier().assess(&name);
            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print_assessment(&name, &assessment);
            }
            Ok(())
        },
        Command::Logo { name, industry, output } => {
            let path = platform.export_logo(&name, industry, output.as_deref()).await?;
            if json {
                println!("{}", json!({ "name": name, "path": path }));
            } else {
                println!("{}", path.display());
            }
            Ok(())
        },
        Command::Favorites(command) => favorites(platform, command, json).await,
        Command::Industries => {
            if json {
                let ids: Vec<&str> = Industry::ALL.into_iter().map(Industry::id).collect();
                println!("{}", serde_json::to_string(&ids)?);
            } else {
                for industry in Industry::ALL {
                    println!("{:<12} {}", industry.id(), industry.display_name());
                }
            }
            Ok(())
        },
    }
}

async fn generate(platform: &Platform, args: GenerateArgs, json: bool) -> Result<()> {
    let flow = if args.extended { GenerationFlow::Extended } else { GenerationFlow::Primary };
    let mut request = IdeationRequest::new(args.keywords).industry(args.industry).flow(flow);
    if let Some(suffixes) = args.suffixes.into_iter().reduce(|all, suffix| all | suffix) {
        request = request.suffixes(suffixes);
    }
    if let Some(seed) = args.seed {
        request = request.seed(seed);
    }

    let batch = match platform.studio().ideate(request).await {
        Ok(batch) => batch,
        Err(IdeationError::Naming { source, .. }) => bail!("{source}"),
        Err(err) => {
            error!(error = %err, "Ideation failed");
            bail!("Failed to generate names. Please try again.");
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    for record in &batch.records {
        print_record(record);
    }
    Ok(())
}

async fn favorites(platform: &Platform, command: FavoritesCommand, json: bool) -> Result<()> {
    let favorites = platform.favorites();

    match command {
        FavoritesCommand::List => {},
        FavoritesCommand::Add { name } => {
            if !favorites.add(&name).await? {
                println!("{} is already a favorite", name.trim());
            }
        },
        FavoritesCommand::Remove { name } => {
            if !favorites.remove(&name).await? {
                println!("{} is not a favorite", name.trim());
            }
        },
        FavoritesCommand::Toggle { name } => match favorites.toggle(&name).await? {
            Toggle::Added => println!("Added {}", name.trim()),
            Toggle::Removed => println!("Removed {}", name.trim()),
        },
    }

    let names = favorites.list().await?;
    if json {
        println!("{}", serde_json::to_string(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn print_record(record: &GeneratedNameRecord) {
    println!("{}  [trademark: {}]", record.name, record.trademark.risk_level);

    let domains: Vec<&str> = record.available_domains().map(|d| d.domain.as_str()).collect();
    if domains.is_empty() {
        println!("  domains: none available");
    } else {
        println!("  domains: {}", domains.join(", "));
    }

    let social: Vec<String> = record
        .social
        .iter()
        .map(|check| format!("{} {:?}", check.platform.as_str(), check.outcome))
        .collect();
    println!("  social:  {}", social.join(", "));
}

fn print_assessment(name: &str, assessment: &TrademarkAssessment) {
    println!("{name}: {} risk", assessment.risk_level);
    if !assessment.similar_marks.is_empty() {
        println!("  similar marks: {}", assessment.similar_marks.join(", "));
    }
    println!("  {}", assessment.advice);
}
