use airdesk::aircraft::Aircraft;
use airdesk::airport::{Airport, BookingOutcome};
use airdesk::flight::Flight;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use std::process::{Command, Stdio};
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

const PAGE_ROWS: usize = 20;

#[derive(Tabled)]
struct FlightRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Flight")]
    number: String,
    #[tabled(rename = "From")]
    departure: String,
    #[tabled(rename = "To")]
    destination: String,
    #[tabled(rename = "Departs")]
    departs: String,
    #[tabled(rename = "Aircraft")]
    aircraft: String,
    #[tabled(rename = "Free seats")]
    free_seats: u32,
    #[tabled(rename = "Status")]
    status: String,
}

impl FlightRow {
    fn new(index: usize, flight: &Flight) -> FlightRow {
        FlightRow {
            index,
            number: flight.number().to_string(),
            departure: flight.departure().to_string(),
            destination: flight.destination().to_string(),
            departs: airdesk::time::format_departure(flight.departure_time()),
            aircraft: flight.aircraft().registration().to_string(),
            free_seats: flight.available_seats(),
            status: flight.status().to_string(),
        }
    }
}

#[derive(Tabled)]
struct AircraftRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Registration")]
    registration: String,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Available")]
    available: String,
}

impl AircraftRow {
    fn new(index: usize, aircraft: &Aircraft) -> AircraftRow {
        AircraftRow {
            index,
            model: aircraft.model().to_string(),
            registration: aircraft.registration().to_string(),
            capacity: aircraft.capacity(),
            available: if aircraft.is_available() { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Runs the interactive menu until the user exits or closes the input.
pub fn run(airport: &mut Airport) -> rustyline::Result<()> {
    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .build();
    let mut rl = DefaultEditor::with_config(config)?;

    match main_menu(&mut rl, airport) {
        Err(ReadlineError::Interrupted) => {
            println!("CTRL-C");
            Ok(())
        }
        Err(ReadlineError::Eof) => {
            println!("CTRL-D");
            Ok(())
        }
        other => other,
    }
}

fn main_menu(rl: &mut DefaultEditor, airport: &mut Airport) -> rustyline::Result<()> {
    loop {
        println!("\n{}", "AIRPORT MANAGEMENT".bold());
        println!("1. Records");
        println!("2. Flights");
        println!("3. Statistics");
        println!("4. Exit");
        match ask(rl, ">> ")?.as_str() {
            "1" => records_menu(rl, airport)?,
            "2" => flights_menu(rl, airport)?,
            "3" => show_statistics(airport),
            "4" => return Ok(()),
            other => failure(&format!("Unknown choice: {other}")),
        }
    }
}

fn records_menu(rl: &mut DefaultEditor, airport: &mut Airport) -> rustyline::Result<()> {
    loop {
        println!("\n{}", "RECORDS".bold());
        println!("1. Add aircraft");
        println!("2. Delete aircraft");
        println!("3. Add passenger");
        println!("4. Delete passenger");
        println!("5. Back");
        match ask(rl, ">> ")?.as_str() {
            "1" => add_aircraft(rl, airport)?,
            "2" | "4" => failure("Deleting records is not supported."),
            "3" => {
                let passport = ask(rl, "Passport: ")?;
                add_passenger(rl, airport, &passport)?;
            }
            "5" => return Ok(()),
            other => failure(&format!("Unknown choice: {other}")),
        }
    }
}

fn flights_menu(rl: &mut DefaultEditor, airport: &mut Airport) -> rustyline::Result<()> {
    loop {
        println!("\n{}", "FLIGHTS".bold());
        println!("1. Create flight");
        println!("2. Cancel flight");
        println!("3. Add passenger to flight");
        println!("4. Remove passenger from flight");
        println!("5. Show flights");
        println!("6. Back");
        match ask(rl, ">> ")?.as_str() {
            "1" => create_flight(rl, airport)?,
            "2" => cancel_flight(rl, airport)?,
            "3" => book_passenger(rl, airport)?,
            "4" => failure("Removing passengers from flights is not supported."),
            "5" => show_flights(rl, airport)?,
            "6" => return Ok(()),
            other => failure(&format!("Unknown choice: {other}")),
        }
    }
}

fn add_aircraft(rl: &mut DefaultEditor, airport: &mut Airport) -> rustyline::Result<()> {
    let model = ask(rl, "Model: ")?;
    let Some(capacity) = ask_number(rl, "Capacity: ")? else {
        return Ok(());
    };
    let registration = ask(rl, "Registration: ")?;
    match airport.add_aircraft(&model, capacity, &registration) {
        Ok(aircraft) => success(&format!("Saved {aircraft}")),
        Err(e) => failure(&e.to_string()),
    }
    Ok(())
}

/// Collects the remaining passenger details and registers the passenger.
/// Returns whether the passenger now exists.
fn add_passenger(
    rl: &mut DefaultEditor,
    airport: &mut Airport,
    passport: &str,
) -> rustyline::Result<bool> {
    let surname = ask(rl, "Surname: ")?;
    let name = ask(rl, "Name: ")?;
    let patronymic = ask(rl, "Patronymic: ")?;
    let date_of_birth = ask(rl, "Date of birth (YYYY-MM-DD): ")?;
    match airport.add_passenger(passport, &name, &surname, &patronymic, &date_of_birth) {
        Ok(passenger) => {
            success(&format!("Saved {passenger}"));
            Ok(true)
        }
        Err(e) => {
            failure(&e.to_string());
            Ok(false)
        }
    }
}

fn create_flight(rl: &mut DefaultEditor, airport: &mut Airport) -> rustyline::Result<()> {
    if airport.available_aircraft().is_empty() {
        failure("No available aircraft.");
        return Ok(());
    }
    let number = ask(rl, "Flight number: ")?;
    if airport.find_flight(&number).is_some() {
        failure(&format!("Flight {number} already exists."));
        return Ok(());
    }
    let departure = ask(rl, "Departure city: ")?;
    let destination = ask(rl, "Destination city: ")?;
    let departure_time = ask(rl, "Departure (YYYY-MM-DD HH:MM): ")?;
    let Some(duration) = ask_number(rl, "Duration (min): ")? else {
        return Ok(());
    };

    let available = airport.available_aircraft();
    let rows: Vec<AircraftRow> = available
        .iter()
        .enumerate()
        .map(|(i, a)| AircraftRow::new(i + 1, a))
        .collect();
    print_table(&rows);
    let Some(choice) = choose(rl, "Aircraft #: ", available.len())? else {
        return Ok(());
    };
    let registration = available[choice].registration().to_string();

    match airport.create_flight(
        &number,
        &departure,
        &destination,
        &departure_time,
        &registration,
        duration,
    ) {
        Ok(flight) => success(&format!("Created {flight}")),
        Err(e) => failure(&e.to_string()),
    }
    Ok(())
}

fn cancel_flight(rl: &mut DefaultEditor, airport: &mut Airport) -> rustyline::Result<()> {
    let Some(number) = choose_active_flight(rl, airport, "Flight to cancel #: ")? else {
        return Ok(());
    };
    match airport.cancel_flight(&number) {
        Ok(()) => success(&format!("Flight {number} cancelled.")),
        Err(e) => failure(&e.to_string()),
    }
    Ok(())
}

fn book_passenger(rl: &mut DefaultEditor, airport: &mut Airport) -> rustyline::Result<()> {
    let Some(number) = choose_active_flight(rl, airport, "Flight #: ")? else {
        return Ok(());
    };
    let passport = ask(rl, "Passport: ")?;
    if airport.find_passenger(&passport).is_none() {
        println!("New passenger, enter details:");
        if !add_passenger(rl, airport, &passport)? {
            return Ok(());
        }
    }

    match airport.book_passenger(&number, &passport) {
        Ok(BookingOutcome::Booked) => {
            if let Some(flight) = airport.find_flight(&number) {
                success(&format!(
                    "Passenger {passport} booked on {number}. Occupancy {:.1}%, {} seats left.",
                    flight.occupancy_rate(),
                    flight.available_seats()
                ));
            }
        }
        Ok(BookingOutcome::FlightFull) => failure(&format!("Flight {number} is full.")),
        Ok(BookingOutcome::AlreadyBooked) => {
            failure(&format!("Passenger {passport} is already on {number}."))
        }
        Ok(BookingOutcome::FlightCancelled) => failure(&format!("Flight {number} is cancelled.")),
        Err(e) => failure(&e.to_string()),
    }
    Ok(())
}

fn show_flights(rl: &mut DefaultEditor, airport: &Airport) -> rustyline::Result<()> {
    if airport.flights().is_empty() {
        println!("No flights.");
        return Ok(());
    }
    let rows: Vec<FlightRow> = airport
        .flights()
        .iter()
        .enumerate()
        .map(|(i, f)| FlightRow::new(i + 1, f))
        .collect();
    print_table(&rows);

    let Some(choice) = choose(rl, "Flight # (empty to go back): ", rows.len())? else {
        return Ok(());
    };
    let flight = &airport.flights()[choice];
    println!("\n{}", flight.info());
    let roster = airport.roster(flight);
    if roster.is_empty() {
        println!("\nNo passengers on this flight.");
    } else {
        println!("\nPassengers:");
        for passenger in roster {
            println!("  - {passenger}, age {}", passenger.age());
        }
    }
    Ok(())
}

fn show_statistics(airport: &Airport) {
    println!("\n{}", "AIRPORT STATISTICS".bold());
    println!("{}", airport.statistics());

    let mut fleet: Vec<&Aircraft> = airport.aircraft().iter().map(|a| &**a).collect();
    fleet.sort_by(|a, b| b.cmp_capacity(a));
    if !fleet.is_empty() {
        println!("\nAircraft:");
        let rows: Vec<AircraftRow> = fleet
            .iter()
            .enumerate()
            .map(|(i, a)| AircraftRow::new(i + 1, a))
            .collect();
        print_table(&rows);
    }
}

/// Lists active flights and returns the number of the one picked.
fn choose_active_flight(
    rl: &mut DefaultEditor,
    airport: &Airport,
    prompt: &str,
) -> rustyline::Result<Option<String>> {
    let active = airport.active_flights();
    if active.is_empty() {
        failure("No active flights.");
        return Ok(None);
    }
    let rows: Vec<FlightRow> = active
        .iter()
        .enumerate()
        .map(|(i, f)| FlightRow::new(i + 1, f))
        .collect();
    print_table(&rows);
    Ok(choose(rl, prompt, active.len())?.map(|i| active[i].number().to_string()))
}

fn ask(rl: &mut DefaultEditor, prompt: &str) -> rustyline::Result<String> {
    let line = rl.readline(prompt)?;
    let trimmed = line.trim();
    if !trimmed.is_empty() {
        rl.add_history_entry(trimmed)?;
    }
    Ok(trimmed.to_string())
}

fn ask_number(rl: &mut DefaultEditor, prompt: &str) -> rustyline::Result<Option<u32>> {
    let line = ask(rl, prompt)?;
    match line.parse::<u32>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            failure(&format!("'{line}' is not a non-negative number."));
            Ok(None)
        }
    }
}

/// Reads a 1-based choice and returns it as a 0-based index.
fn choose(rl: &mut DefaultEditor, prompt: &str, len: usize) -> rustyline::Result<Option<usize>> {
    let line = ask(rl, prompt)?;
    if line.is_empty() {
        return Ok(None);
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(Some(n - 1)),
        _ => {
            failure("Invalid choice.");
            Ok(None)
        }
    }
}

fn success(message: &str) {
    println!("{}", message.green());
}

fn failure(message: &str) {
    println!("{}", message.yellow());
}

fn print_table<T: Tabled>(rows: &[T]) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    if rows.len() > PAGE_ROWS {
        paginate(&table.to_string());
    } else {
        println!("{table}");
    }
}

fn paginate(content: &str) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());
    let Ok(mut pager) = pager else {
        println!("{content}");
        return;
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {e}");
            }
        }
    }

    let _ = pager.wait();
}
