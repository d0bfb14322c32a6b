//! Bulk lead import from CSV.

use serde::Deserialize;

use crate::domain::lead::NewLead;
use crate::models::auth::AuthenticatedUser;
use crate::repository::LeadWriter;
use crate::services::{ServiceError, ServiceResult};

/// One row of the upload file. Headers are `name,email,phone,company`;
/// everything but `name` is optional.
#[derive(Debug, Deserialize)]
struct LeadRow {
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    company: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Rows dropped for having an empty name.
    pub skipped: usize,
}

/// Parses the uploaded CSV and creates lead records in bulk.
pub fn import_leads_csv<R>(
    repo: &R,
    user: &AuthenticatedUser,
    data: &[u8],
) -> ServiceResult<ImportSummary>
where
    R: LeadWriter + ?Sized,
{
    if !user.has_role(crate::SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let mut reader = csv::Reader::from_reader(data);
    let mut leads = Vec::new();
    let mut skipped = 0;

    for row in reader.deserialize::<LeadRow>() {
        let row = row.map_err(|err| {
            log::error!("Failed to parse leads CSV: {err}");
            ServiceError::Validation(format!("invalid CSV: {err}"))
        })?;
        if row.name.trim().is_empty() {
            skipped += 1;
            continue;
        }
        leads.push(NewLead::new(
            user.hub_id,
            row.name,
            row.email,
            row.phone,
            row.company,
        ));
    }

    let imported = if leads.is_empty() {
        0
    } else {
        repo.create_leads(&leads)?
    };

    Ok(ImportSummary { imported, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            hub_id: 1,
            roles: vec!["crm".to_string(), "crm_admin".to_string()],
            exp: 0,
        }
    }

    #[test]
    fn import_parses_rows_and_skips_nameless_ones() {
        let csv = b"name,email,phone,company\nJane, Jane@Corp.IO ,,Acme\n,missing@x.y,,\nBob,,,\n";

        let mut repo = MockRepository::new();
        repo.expect_create_leads()
            .withf(|leads| {
                leads.len() == 2
                    && leads[0].name == "Jane"
                    && leads[0].email.as_deref() == Some("jane@corp.io")
                    && leads[1].name == "Bob"
            })
            .returning(|leads| Ok(leads.len()));

        let summary = import_leads_csv(&repo, &admin(), csv).unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                imported: 2,
                skipped: 1
            }
        );
    }

    #[test]
    fn import_requires_admin_role() {
        let repo = MockRepository::new();
        let mut user = admin();
        user.roles = vec!["crm".to_string()];

        let err = import_leads_csv(&repo, &user, b"name\nJane\n").unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[test]
    fn malformed_csv_is_a_validation_error() {
        let repo = MockRepository::new();
        let err = import_leads_csv(&repo, &admin(), b"name,email\n\"unterminated\n").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
