//! HTML bodies for the two booking emails.
//!
//! Rendering is pure so it can be tested without a transport.

use arogya_core::appointment::Appointment;

pub const CLINIC_NAME: &str = "Aarogya Sadan";
pub const CLINIC_PHONE: &str = "+91 98350 67876";
pub const CLINIC_EMAIL: &str = "info@aarogyasadan.com";
pub const CLINIC_ADDRESS: &str = "Basudeopur Chaputa, Hajipur, Vaishali, Bihar";

pub fn patient_subject() -> String {
  format!("Appointment Confirmation - {CLINIC_NAME}")
}

pub fn admin_subject() -> String {
  "New Appointment Booking".to_string()
}

/// Human-readable form of the appointment date, e.g. "Tuesday, 25 August 2026".
fn format_date(appointment: &Appointment) -> String {
  appointment.date.format("%A, %d %B %Y").to_string()
}

/// Confirmation sent to the patient's address.
pub fn patient_body(appointment: &Appointment) -> String {
  format!(
    r#"<div style="font-family: Arial, sans-serif; background-color: #f8fafb; padding: 20px;">
  <div style="background-color: white; border-radius: 10px; padding: 30px; max-width: 600px; margin: 0 auto;">
    <h1 style="color: #1a4d7a; text-align: center;">Appointment Confirmed</h1>

    <p>Dear <strong>{name}</strong>,</p>

    <p>Your appointment has been successfully booked at <strong>{clinic}</strong>.</p>

    <div style="background-color: #f0f4f8; border-left: 4px solid #00a870; padding: 20px; margin: 20px 0;">
      <p><strong>Appointment Details:</strong></p>
      <p>
        <strong>Doctor:</strong> {doctor}<br>
        <strong>Date:</strong> {date}<br>
        <strong>Time:</strong> {time}<br>
        <strong>Reason:</strong> {reason}
      </p>
    </div>

    <div style="background-color: #f0f4f8; border-left: 4px solid #2a7cb9; padding: 20px; margin: 20px 0;">
      <p><strong>Contact Information:</strong></p>
      <p>
        <strong>Phone:</strong> {clinic_phone}<br>
        <strong>Email:</strong> {clinic_email}<br>
        <strong>Address:</strong> {clinic_address}
      </p>
    </div>

    <p><strong>Please arrive 10 minutes before your appointment time.</strong></p>

    <p>If you need to cancel or reschedule, please contact us at least 24 hours in advance.</p>
  </div>
</div>"#,
    name = appointment.name,
    clinic = CLINIC_NAME,
    doctor = appointment.doctor.display_name(),
    date = format_date(appointment),
    time = appointment.time,
    reason = appointment.reason,
    clinic_phone = CLINIC_PHONE,
    clinic_email = CLINIC_EMAIL,
    clinic_address = CLINIC_ADDRESS,
  )
}

/// Notice sent to the clinic's admin address.
pub fn admin_body(appointment: &Appointment) -> String {
  format!(
    r#"<h2>New Appointment Booking</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Phone:</strong> {phone}</p>
<p><strong>Doctor:</strong> {doctor}</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>Time:</strong> {time}</p>
<p><strong>Reason:</strong> {reason}</p>"#,
    name = appointment.name,
    email = appointment.email,
    phone = appointment.phone,
    doctor = appointment.doctor.display_name(),
    date = format_date(appointment),
    time = appointment.time,
    reason = appointment.reason,
  )
}

#[cfg(test)]
mod tests {
  use arogya_core::appointment::{Appointment, AppointmentStatus, Doctor};
  use chrono::{NaiveDate, Utc};
  use uuid::Uuid;

  use super::*;

  fn appointment() -> Appointment {
    Appointment {
      id:         Uuid::new_v4(),
      name:       "Jane Doe".into(),
      email:      "jane@example.com".into(),
      phone:      "9876543210".into(),
      doctor:     Doctor::ShaliniKrishna,
      date:       NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
      time:       "10:00".into(),
      reason:     "checkup".into(),
      status:     AppointmentStatus::Pending,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn patient_body_names_doctor_and_date() {
    let body = patient_body(&appointment());
    assert!(body.contains("Dear <strong>Jane Doe</strong>"));
    assert!(body.contains("Dr. Shalini Krishna (Ophthalmology)"));
    assert!(body.contains("Tuesday, 25 August 2026"));
    assert!(body.contains("10:00"));
    assert!(body.contains("checkup"));
  }

  #[test]
  fn admin_body_carries_contact_details() {
    let body = admin_body(&appointment());
    assert!(body.contains("jane@example.com"));
    assert!(body.contains("9876543210"));
    assert!(body.contains("Dr. Shalini Krishna (Ophthalmology)"));
  }

  #[test]
  fn subjects_are_stable() {
    assert_eq!(patient_subject(), "Appointment Confirmation - Aarogya Sadan");
    assert_eq!(admin_subject(), "New Appointment Booking");
  }
}
