#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use roulement::{
    config::{load_plan, save_plan, Plan},
    io,
    model::{MonthTarget, Roster, ShiftDefinition},
    render::{GridRenderer, TextTable},
    scheduler::{Scheduler, ViolationKind},
    Schedule,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning mensuel (sans état entre deux exécutions)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

/// Sources du planning ; les options explicites priment sur le fichier de plan.
#[derive(Args, Debug)]
struct PlanArgs {
    /// Fichier de plan JSON (voir `init-plan`)
    #[arg(long)]
    plan: Option<String>,

    /// liste "Alice,Bob,..."
    #[arg(long)]
    workers: Option<String>,

    /// CSV de personnes (header `name`)
    #[arg(long)]
    workers_csv: Option<String>,

    /// CSV de créneaux (header `name,start,end,people_required[,is_night]`)
    #[arg(long)]
    shifts_csv: Option<String>,

    /// Nombre de créneaux par défaut si aucun n'est fourni
    #[arg(long, default_value_t = 3)]
    shifts: usize,

    /// Mois visé `YYYY-MM` (mois courant par défaut)
    #[arg(long)]
    month: Option<String>,

    #[arg(long)]
    max_shifts_per_week: Option<u32>,

    #[arg(long)]
    max_shifts_per_month: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer et afficher le planning du mois
    Generate {
        #[command(flatten)]
        input: PlanArgs,
        /// Export tableur (CSV)
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Générer puis vérifier effectifs et règles
    Check {
        #[command(flatten)]
        input: PlanArgs,
        /// Export CSV des créneaux en sous-effectif (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Écrire un fichier de plan d'exemple
    InitPlan {
        #[arg(long)]
        out: String,
        #[arg(long, default_value_t = 3)]
        shifts: usize,
    },
}

struct Prepared {
    scheduler: Scheduler,
    roster: Roster,
    shifts: Vec<ShiftDefinition>,
    target: MonthTarget,
}

fn prepare(args: PlanArgs) -> Result<Prepared> {
    let plan = match &args.plan {
        Some(path) => load_plan(path)?,
        None => Plan {
            month: None,
            workers: Roster::new(),
            shifts: Vec::new(),
            options: Default::default(),
        },
    };

    let roster = if let Some(list) = &args.workers {
        Roster::from_names(list.split(',').filter(|s| !s.trim().is_empty()))?
    } else if let Some(path) = &args.workers_csv {
        io::import_workers_csv(path)?
    } else {
        plan.workers.clone()
    };
    if roster.is_empty() {
        bail!("aucune personne à planifier (--workers, --workers-csv ou --plan)");
    }

    let shifts = match &args.shifts_csv {
        Some(path) => io::import_shifts_csv(path)?,
        None if plan.shifts.is_empty() => ShiftDefinition::defaults(args.shifts),
        None => plan.shifts.clone(),
    };

    let target = match &args.month {
        Some(m) => m.parse::<MonthTarget>().context("--month")?,
        None => plan.target()?.unwrap_or_else(MonthTarget::current),
    };

    let mut options = plan.options;
    if let Some(v) = args.max_shifts_per_week {
        options.max_shifts_per_week = v;
    }
    if let Some(v) = args.max_shifts_per_month {
        options.max_shifts_per_month = v;
    }

    Ok(Prepared {
        scheduler: Scheduler::new(options),
        roster,
        shifts,
        target,
    })
}

fn print_shortfalls(schedule: &Schedule) {
    if schedule.shortfalls.is_empty() {
        return;
    }
    eprintln!("Understaffed: {} shift(s)", schedule.shortfalls.len());
    for s in &schedule.shortfalls {
        eprintln!(
            "  day {} | {} | {}/{}",
            s.day + 1,
            s.shift,
            s.assigned,
            s.required
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            input,
            out_csv,
            out_json,
        } => {
            let p = prepare(input)?;
            let schedule = p.scheduler.generate(&p.roster, &p.shifts, p.target)?;
            print!("{}", TextTable::default().render(&schedule));
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            print_shortfalls(&schedule);
            0
        }
        Commands::Check { input, report } => {
            let p = prepare(input)?;
            let schedule = p.scheduler.generate(&p.roster, &p.shifts, p.target)?;
            let violations = p.scheduler.audit(&schedule, &p.shifts)?;

            for v in &violations {
                eprintln!(
                    "{} | day {} | {}",
                    v.worker,
                    v.day + 1,
                    match v.kind {
                        ViolationKind::UnknownShift => "unknown-shift",
                        ViolationKind::WeeklyCap => "weekly-cap",
                        ViolationKind::MonthlyCap => "monthly-cap",
                        ViolationKind::MissingNightRest => "night-rest",
                    }
                );
            }
            print_shortfalls(&schedule);

            if let Some(path) = report {
                let mut w = csv::Writer::from_path(path)?;
                w.write_record(["day", "shift", "required", "assigned"])?;
                for s in &schedule.shortfalls {
                    w.write_record([
                        (s.day + 1).to_string(),
                        s.shift.clone(),
                        s.required.to_string(),
                        s.assigned.to_string(),
                    ])?;
                }
                w.flush()?;
            }

            if violations.is_empty() && schedule.is_fully_staffed() {
                println!("OK: {} fully staffed", p.target);
                0
            } else {
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::InitPlan { out, shifts } => {
            save_plan(&out, &Plan::sample(shifts))?;
            println!("Plan written to {out}");
            0
        }
    };

    std::process::exit(code);
}
