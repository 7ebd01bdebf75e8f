//! In-memory doubles for the pipeline's collaborators. No database, no
//! network; everything behind the same traits the production wiring uses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

use phonebook_types::contacts::{Contact, ContactDetail, ContactInformation, LocationStatistics};
use phonebook_types::errors::{ApplicationError, LookupError};
use phonebook_types::events::ReportRequested;
use phonebook_types::reports::Report;

use crate::messaging::ReportRequestedPublisher;
use crate::repository::{ContactRepository, ReportRepository};
use crate::statistics::LocationStatisticsClient;

#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: Mutex<HashMap<Uuid, Report>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn create(&self, report: &Report) -> Result<(), ApplicationError> {
        let mut reports = self.reports.lock().unwrap();
        reports.insert(report.id, report.clone());
        Ok(())
    }

    async fn get_by_id(&self, report_id: Uuid) -> Result<Report, ApplicationError> {
        let reports = self.reports.lock().unwrap();
        reports
            .get(&report_id)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Report", report_id))
    }

    async fn list_all(&self) -> Result<Vec<Report>, ApplicationError> {
        let reports = self.reports.lock().unwrap();
        let mut all: Vec<Report> = reports.values().cloned().collect();
        all.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        Ok(all)
    }

    async fn update(&self, report: &Report) -> Result<(), ApplicationError> {
        let mut reports = self.reports.lock().unwrap();
        if !reports.contains_key(&report.id) {
            return Err(ApplicationError::not_found("Report", report.id));
        }
        reports.insert(report.id, report.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<HashMap<Uuid, Contact>>,
    informations: Mutex<HashMap<Uuid, ContactInformation>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: &Contact) -> Result<(), ApplicationError> {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id, contact.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ApplicationError> {
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.values().cloned().collect())
    }

    async fn get_with_details(&self, contact_id: Uuid) -> Result<ContactDetail, ApplicationError> {
        let contacts = self.contacts.lock().unwrap();
        let contact = contacts
            .get(&contact_id)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Contact", contact_id))?;

        let informations = self.informations.lock().unwrap();
        let informations = informations
            .values()
            .filter(|ci| ci.contact_id == contact_id)
            .cloned()
            .collect();

        Ok(ContactDetail {
            contact,
            informations,
        })
    }

    async fn exists(&self, contact_id: Uuid) -> Result<bool, ApplicationError> {
        Ok(self.contacts.lock().unwrap().contains_key(&contact_id))
    }

    async fn delete(&self, contact_id: Uuid) -> Result<bool, ApplicationError> {
        let removed = self.contacts.lock().unwrap().remove(&contact_id).is_some();
        if removed {
            self.informations
                .lock()
                .unwrap()
                .retain(|_, ci| ci.contact_id != contact_id);
        }
        Ok(removed)
    }

    async fn add_information(&self, info: &ContactInformation) -> Result<(), ApplicationError> {
        let mut informations = self.informations.lock().unwrap();
        informations.insert(info.id, info.clone());
        Ok(())
    }

    async fn remove_information(&self, info_id: Uuid) -> Result<bool, ApplicationError> {
        Ok(self.informations.lock().unwrap().remove(&info_id).is_some())
    }

    async fn informations_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<ContactInformation>, ApplicationError> {
        use phonebook_types::contacts::ContactInfoType;

        let informations = self.informations.lock().unwrap();
        Ok(informations
            .values()
            .filter(|ci| {
                ci.info_type == ContactInfoType::Location
                    && ci.info_content.eq_ignore_ascii_case(location)
            })
            .cloned()
            .collect())
    }
}

/// Scriptable lookup double: fixed counts, optionally failing the first N
/// calls, or failing always.
pub struct StubStatisticsClient {
    contact_count: i64,
    phone_number_count: i64,
    always_fail: bool,
    failures_left: AtomicU32,
    calls: AtomicU32,
}

impl StubStatisticsClient {
    pub fn with_counts(contact_count: i64, phone_number_count: i64) -> Self {
        Self {
            contact_count,
            phone_number_count,
            always_fail: false,
            failures_left: AtomicU32::new(0),
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing() -> Self {
        let mut stub = Self::with_counts(0, 0);
        stub.always_fail = true;
        stub
    }

    pub fn fail_times(self, failures: u32) -> Self {
        self.failures_left.store(failures, Ordering::SeqCst);
        self
    }

    /// Number of successful or failed lookup attempts made so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LocationStatisticsClient for StubStatisticsClient {
    async fn lookup(&self, location: &str) -> Result<LocationStatistics, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.always_fail {
            return Err(LookupError::Transport("stubbed transport failure".into()));
        }

        let failures = self.failures_left.load(Ordering::SeqCst);
        if failures > 0 {
            self.failures_left.store(failures - 1, Ordering::SeqCst);
            return Err(LookupError::Transport("stubbed transport failure".into()));
        }

        Ok(LocationStatistics {
            location: location.to_string(),
            contact_count: self.contact_count,
            phone_number_count: self.phone_number_count,
        })
    }
}

/// Publisher that only records what was emitted.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<ReportRequested>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportRequested> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ReportRequestedPublisher for RecordingPublisher {
    async fn publish(&self, event: ReportRequested) -> Result<(), ApplicationError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
