//! QSCD recognition — certificate-policy OIDs and QC statements.
//!
//! A certificate is supported by a qualified signature creation device
//! when either signal is present; the two recognition paths are
//! independent and either alone suffices.

use super::CertificateWrapper;

/// QCP+ : qualified certificate policy issued to a subject whose key
/// resides in a secure signature creation device.
pub const OID_QCP_PLUS: &str = "0.4.0.1456.1.1";

/// QCP-w with SSCD (legacy qualified policy, device-backed).
pub const OID_QCP_PUBLIC_WITH_SSCD: &str = "0.4.0.194112.1.2";

/// id-etsi-qcs-QcSSCD: QC statement declaring the private key resides
/// in a qualified device.
pub const OID_QC_SSCD: &str = "0.4.0.1862.1.4";

/// QCP : qualified certificate policy (no device requirement).
pub const OID_QCP: &str = "0.4.0.1456.1.2";

/// id-etsi-qcs-QcCompliance: QC statement declaring the certificate is
/// an EU qualified certificate.
pub const OID_QC_COMPLIANCE: &str = "0.4.0.1862.1.1";

/// Is the certificate qualified, by policy OID or QC statement?
pub fn is_qualified(cert: &CertificateWrapper) -> bool {
    cert.policy_oids
        .iter()
        .any(|oid| oid == OID_QCP || oid == OID_QCP_PLUS)
        || cert
            .qc_statement_ids
            .iter()
            .any(|oid| oid == OID_QC_COMPLIANCE)
}

/// Does a certificate-policy OID indicate QSCD support?
pub fn policy_oids_indicate_qscd(cert: &CertificateWrapper) -> bool {
    cert.policy_oids
        .iter()
        .any(|oid| oid == OID_QCP_PLUS || oid == OID_QCP_PUBLIC_WITH_SSCD)
}

/// Does a QC statement indicate QSCD support?
pub fn qc_statements_indicate_qscd(cert: &CertificateWrapper) -> bool {
    cert.qc_statement_ids.iter().any(|oid| oid == OID_QC_SSCD)
}
