use std::env;

use chrono::NaiveDate;
use colored::Colorize;

use farmbook::{
    aggregation::per_farmer_summary,
    errors::LedgerError,
    format::format_rupees,
    init,
    report::{build_farmer_report, build_overall_report, render_farmer, render_overall},
    repository::{LedgerRepository, NewExpense, NewIncome},
    storage::JsonStore,
};

fn main() {
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), LedgerError> {
    let store = JsonStore::open_default()?;
    let repo = LedgerRepository::new(Box::new(store));

    let command = args.first().map(String::as_str).unwrap_or("help");
    match command {
        "report" => {
            let report = build_overall_report(&repo.document());
            print!("{}", render_overall(&report));
        }
        "farmer" => {
            let id = parse_id(args.get(1))?;
            let report = build_farmer_report(&repo.document(), id)?;
            print!("{}", render_farmer(&report));
        }
        "farmers" => {
            let doc = repo.document();
            println!("{}", "Farmers".bold());
            for summary in per_farmer_summary(&doc) {
                println!(
                    "  #{:<4} {:<20} {:<12} {:>14} {:>14} {:>14}",
                    summary.id,
                    summary.name,
                    summary.crop,
                    format_rupees(summary.income),
                    format_rupees(summary.expense),
                    format_rupees(summary.profit)
                );
            }
        }
        "add-farmer" => {
            let name = arg_or(args.get(1), "name")?;
            let crop = args.get(2).cloned().unwrap_or_default();
            let area = args.get(3).cloned().unwrap_or_default();
            let id = repo.add_farmer(name, crop, area)?;
            println!("Added farmer #{id}");
        }
        "add-income" => {
            let farmer_id = parse_id(args.get(1))?;
            let income = NewIncome {
                amount: parse_amount(args.get(2)),
                note: args.get(3).cloned(),
                date: parse_date(args.get(4)),
            };
            match repo.add_income(farmer_id, income)? {
                Some(id) => println!("Added income #{id} for farmer #{farmer_id}"),
                None => return Err(LedgerError::FarmerNotFound(farmer_id)),
            }
        }
        "add-expense" => {
            let expense = NewExpense {
                farmer_id: parse_id(args.get(1))?,
                amount: parse_amount(args.get(2)),
                category: args.get(3).cloned(),
                note: args.get(4).cloned(),
                date: parse_date(args.get(5)),
            };
            let id = repo.add_expense(expense)?;
            println!("Added expense #{id}");
        }
        "reset" => {
            repo.reset()?;
            println!("Ledger reset to seed data.");
        }
        _ => usage(),
    }
    Ok(())
}

fn usage() {
    println!("{}", "farmbook_cli".bold());
    println!("  report                                       print the overall report");
    println!("  farmer <id>                                  print one farmer's report");
    println!("  farmers                                      list farmers with totals");
    println!("  add-farmer <name> [crop] [area]              add a farmer");
    println!("  add-income <farmer-id> <amount> [note] [date]");
    println!("  add-expense <farmer-id> <amount> [category] [note] [date]");
    println!("  reset                                        restore the seed ledger");
}

fn parse_id(arg: Option<&String>) -> Result<u32, LedgerError> {
    let raw = arg_or(arg, "id")?;
    raw.parse()
        .map_err(|_| LedgerError::InvalidInput(format!("invalid id: {raw}")))
}

fn arg_or(arg: Option<&String>, what: &str) -> Result<String, LedgerError> {
    arg.cloned()
        .ok_or_else(|| LedgerError::InvalidInput(format!("missing argument: {what}")))
}

/// Non-numeric or absent amounts degrade to zero, matching the ledger's
/// lenient coercion policy.
fn parse_amount(arg: Option<&String>) -> f64 {
    arg.and_then(|raw| raw.parse().ok()).unwrap_or(0.0)
}

fn parse_date(arg: Option<&String>) -> Option<NaiveDate> {
    arg.and_then(|raw| raw.parse().ok())
}
