use anyhow::Result;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use household_model::{
    Family, IntoMoney, Job, Mathematics, ModelConfig, Money, Person, PersonRegistry, Salary,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => ModelConfig::from_file(path)?,
        None => ModelConfig::default(),
    };
    info!(
        rate_policy = ?config.rate_policy,
        household_hours = config.household_hours,
        "configuration loaded"
    );

    run_descriptions(&config)?;
    run_math(&config);
    run_double_extensions();

    Ok(())
}

fn run_descriptions(config: &ModelConfig) -> Result<()> {
    println!("🏷️  Descriptions");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\nMoney:");
    println!("\t{}", Money::new(22.0, "EUR"));
    println!("\t{}", Money::new(101.55, "GBP"));

    println!("\nJob:");
    println!("\t{}", Job::new("Professor", Salary::per_year(70000.0)));
    println!("\t{}", Job::new("Postal Worker", Salary::per_hour(19.5)));

    let mut people = PersonRegistry::new();

    let margaery = people.register(Person::new("Margaery", "Tyrell", 20));
    let joffrey = people.register(Person::with_relations(
        "Joffrey",
        "Baratheon",
        19,
        Job::new("King", Salary::per_year(500000.0)),
        Some(margaery),
    ));
    let arya = people.register(Person::new("Arya", "Stark", 16));

    println!("\nPerson:");
    println!("\t{}", people.describe(&joffrey)?);
    println!("\t{}", people.describe(&arya)?);

    let bob = people.register(Person::with_relations(
        "Bob",
        "Belcher",
        44,
        Job::new("Frycook", Salary::per_hour(6.5)),
        None,
    ));
    let linda = people.register(Person::with_relations(
        "Linda",
        "Belcher",
        42,
        Job::new("Bookkeeper", Salary::per_hour(6.5)),
        None,
    ));
    people.marry(bob, linda)?;
    let tina = people.register(Person::with_relations(
        "Tina",
        "Belcher",
        13,
        Job::new("Waitress", Salary::per_hour(2.0)),
        None,
    ));
    let gene = people.register(Person::new("Gene", "Belcher", 11));
    let louise = people.register(Person::new("Louise", "Belcher", 9));

    let mut belchers = Family::new(vec![bob, linda, tina, gene, louise], &people);

    println!("\nFamily:");
    println!("\t{}", belchers.describe(&people)?);
    println!(
        "\tHousehold income: ${:.2}",
        belchers.household_income_for(config.household_hours, &people)
    );

    belchers.have_child(&mut people, "New", "Born");
    println!("\tAfter a new arrival: {} members", belchers.len());

    if let Some(job) = people.get_mut(&bob).and_then(|p| p.job.as_mut()) {
        job.raise(10.0);
        println!("\tBob got a raise: {}", job);
    }

    Ok(())
}

fn run_math(config: &ModelConfig) {
    println!("\n\n➕ Mathematics");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut c3 = Money::new(25.0, "USD");
    let c4 = Money::new(18.5, "GBP");
    println!("\t{} + {}", c3, c4);
    c3.add(&c4);
    println!("\t= {}", c3);

    let mut c5 = Money::new(20.0, "CAN");
    let c6 = Money::new(10.0, "USD");
    println!("\t{} - {}", c5, c6);
    c5.subtract(&c6);
    println!("\t= {}", c5);

    let mut odd = Money::new(5.0, "JPY");
    println!("\t{} → USD under {:?}", odd, config.rate_policy);
    match odd.convert_with("USD", config.rate_policy) {
        Ok(()) => println!("\t= {}", odd),
        Err(e) => println!("\t✗ {}", e),
    }
}

fn run_double_extensions() {
    println!("\n\n🔢 Double");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let d1 = 34.0_f64;
    println!("\tConverting Double {:?} to a CAN Money object:", d1);
    println!("\t{}", d1.can());

    let d2 = 13.2_f64;
    println!("\tConverting Double {:?} to a EUR Money object:", d2);
    println!("\t{}", d2.eur());
}
