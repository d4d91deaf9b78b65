//! Demo CLI over the heritage core.
//!
//! # Responsibility
//! - Stand in for the presentation layer: list, search, audit, and render
//!   the immediate-family view from the embedded demo dataset.
//! - Keep output deterministic for quick local sanity checks.

use heritage_core::{
    core_version, embedded_members, FamilyStore, FamilyView, HeritageService, Person,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let store = match FamilyStore::new(embedded_members()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("embedded dataset rejected: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = HeritageService::new(store);

    match args.as_slice() {
        [command] if command == "list" => {
            for person in service.members() {
                print_member_line(person);
            }
            ExitCode::SUCCESS
        }
        [command, query] if command == "search" => {
            let hits = service.search(query);
            if hits.is_empty() {
                println!("no members found for `{query}`");
            }
            for person in hits {
                print_member_line(person);
            }
            ExitCode::SUCCESS
        }
        [command] if command == "audit" => {
            let issues = service.store().check_consistency();
            if issues.is_empty() {
                println!("dataset is internally coherent");
                return ExitCode::SUCCESS;
            }
            for issue in &issues {
                println!("{issue}");
            }
            ExitCode::FAILURE
        }
        [command, id_text] if command == "family" => match id_text.parse() {
            Ok(id) => match service.family_of(id) {
                Some(view) => {
                    print_family_view(&view);
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no member with id {id}");
                    ExitCode::FAILURE
                }
            },
            Err(_) => {
                eprintln!("`{id_text}` is not a member id");
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("heritage_cli {}", core_version());
            eprintln!("usage: heritage_cli list");
            eprintln!("       heritage_cli search <query>");
            eprintln!("       heritage_cli family <id>");
            eprintln!("       heritage_cli audit");
            ExitCode::FAILURE
        }
    }
}

fn print_member_line(person: &Person) {
    println!(
        "#{:<3} {:<18} {:<12} {}",
        person.id, person.name, person.generation, person.birthday
    );
}

// Mirrors the demo page's modal sections: parents, then the member and
// spouse, then children.
fn print_family_view(view: &FamilyView<'_>) {
    println!("Immediate family of {}", view.member.name);

    if !view.parents.is_empty() {
        println!("  Parents:");
        for parent in &view.parents {
            println!("    {} ({})", parent.name, parent.birthday);
        }
    }

    match view.spouse {
        Some(spouse) => println!("  Couple: {} & {}", view.member.name, spouse.name),
        None => println!("  Member: {}", view.member.name),
    }

    if !view.children.is_empty() {
        println!("  Children:");
        for child in &view.children {
            println!("    {} ({})", child.name, child.birthday);
        }
    }
}
