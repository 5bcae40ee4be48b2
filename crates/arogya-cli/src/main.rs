//! `arogya` — command-line client for the Arogya booking API.
//!
//! # Usage
//!
//! ```
//! arogya book --name "Jane Doe" --email jane@example.com \
//!   --phone 9876543210 --doctor rakesh-gupta \
//!   --date 2026-09-01 --time 10:00 --reason checkup
//! arogya list
//! arogya update <id> confirmed
//! ```

mod client;

use anyhow::Result;
use arogya_core::{
  appointment::{Appointment, Doctor},
  validate::{BookingRequest, validate},
};
use chrono::Local;
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig, ClientError};
use uuid::Uuid;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "arogya", about = "Command-line client for the Arogya booking API")]
struct Args {
  /// Base URL of the booking server.
  #[arg(long, env = "AROGYA_URL", default_value = "http://localhost:5000")]
  url: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Book a new appointment.
  Book {
    #[arg(long)]
    name:   String,
    #[arg(long)]
    email:  String,
    #[arg(long)]
    phone:  String,
    /// Practitioner identifier, e.g. `rakesh-gupta`.
    #[arg(long)]
    doctor: String,
    /// Appointment date, `YYYY-MM-DD`.
    #[arg(long)]
    date:   String,
    /// Appointment time, e.g. `14:30`.
    #[arg(long)]
    time:   String,
    #[arg(long)]
    reason: String,
  },
  /// List all appointments, newest first.
  List,
  /// Show a single appointment.
  Show { id: Uuid },
  /// List appointments with the given status.
  Status { status: String },
  /// Set an appointment's status (`pending`, `confirmed`, `cancelled`).
  Update { id: Uuid, status: String },
  /// Delete an appointment.
  Delete { id: Uuid },
  /// Check that the server is up.
  Health,
  /// List the clinic's practitioners.
  Doctors,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let client = ApiClient::new(ApiConfig { base_url: args.url.clone() })?;

  match args.command {
    Command::Book { name, email, phone, doctor, date, time, reason } => {
      let payload =
        BookingRequest { name, email, phone, doctor, date, time, reason };
      book(&client, &args.url, payload).await
    }
    Command::List => {
      let resp = run(client.list().await, &args.url);
      print_appointment_rows(&resp.appointments);
      Ok(())
    }
    Command::Show { id } => {
      let resp = run(client.get(id).await, &args.url);
      print_appointment(&resp.appointment);
      Ok(())
    }
    Command::Status { status } => {
      let resp = run(client.list_by_status(&status).await, &args.url);
      print_appointment_rows(&resp.appointments);
      Ok(())
    }
    Command::Update { id, status } => {
      let resp = run(client.update_status(id, &status).await, &args.url);
      println!("{}", resp.message);
      print_appointment(&resp.appointment);
      Ok(())
    }
    Command::Delete { id } => {
      let resp = run(client.delete(id).await, &args.url);
      println!("{}", resp.message);
      Ok(())
    }
    Command::Health => {
      let resp = run(client.health().await, &args.url);
      println!("{}", resp.message);
      Ok(())
    }
    Command::Doctors => {
      for doctor in Doctor::ALL {
        println!("{:<16} {}", doctor.as_str(), doctor.display_name());
      }
      Ok(())
    }
  }
}

// ─── Booking flow ────────────────────────────────────────────────────────────

/// The form-controller flow: validate locally for immediate feedback, then
/// submit. Only the server's validation pass can actually reject a booking;
/// the local pass just saves a round-trip.
async fn book(
  client: &ApiClient,
  url: &str,
  payload: BookingRequest,
) -> Result<()> {
  if let Err(e) = validate(&payload, Local::now().date_naive()) {
    eprintln!("Error: {e}");
    std::process::exit(1);
  }

  match client.book(&payload).await {
    Ok(resp) => {
      println!("Success! Your appointment has been booked.");
      println!(
        "A confirmation email has been sent to {}.",
        resp.appointment.email
      );
      println!();
      print_appointment(&resp.appointment);
      Ok(())
    }
    Err(ClientError::Rejected(message)) => {
      eprintln!("Error: {message}");
      std::process::exit(1);
    }
    Err(ClientError::Transport(_)) => {
      connection_error(url);
    }
  }
}

// ─── Output helpers ──────────────────────────────────────────────────────────

/// Unwrap an API result, turning a transport failure into the generic
/// connection banner and a rejection into the server's message.
fn run<T>(result: client::Result<T>, url: &str) -> T {
  match result {
    Ok(value) => value,
    Err(ClientError::Rejected(message)) => {
      eprintln!("Error: {message}");
      std::process::exit(1);
    }
    Err(ClientError::Transport(_)) => {
      connection_error(url);
    }
  }
}

fn connection_error(url: &str) -> ! {
  eprintln!("Connection error: could not reach the server at {url}.");
  eprintln!("Please check that the server is running.");
  std::process::exit(1);
}

fn print_appointment(a: &Appointment) {
  println!("id:      {}", a.id);
  println!("patient: {} <{}> {}", a.name, a.email, a.phone);
  println!("doctor:  {}", a.doctor.display_name());
  println!("when:    {} at {}", a.date.format("%A, %d %B %Y"), a.time);
  println!("reason:  {}", a.reason);
  println!("status:  {}", a.status);
}

fn print_appointment_rows(appointments: &[Appointment]) {
  if appointments.is_empty() {
    println!("no appointments");
    return;
  }
  for a in appointments {
    println!(
      "{}  {} {:>5}  {:<11}  {:<16}  {}",
      a.id,
      a.date,
      a.time,
      a.status.as_str(),
      a.doctor.as_str(),
      a.name
    );
  }
}
