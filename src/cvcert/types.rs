use rasn::types::ObjectIdentifier as Oid;
use time::UtcDateTime;

use super::errors::Error;
use crate::asn1::oid::{
    ID_AT_OID, ID_AT_OID_STR, ID_IS_OID, ID_IS_OID_STR, ID_ST_OID, ID_ST_OID_STR,
};

pub(crate) type CvcResult<T> = Result<T, Error>;

/// Certificate holder roles according to TR-03110-3 C.4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Country Verifying Certificate Authority
    Cvca,
    /// Document Verifier (official domestic)
    DvOfficial,
    /// Document Verifier (non-official/foreign)
    DvNonOfficial,
    /// Authentication Terminal
    AuthenticationTerminal,
    /// Inspection Terminal (inspection system)
    InspectionTerminal,
    /// Signature Terminal
    SignatureTerminal,
}

impl Role {
    /// Check if this is one of the two document verifier roles
    pub fn is_document_verifier(&self) -> bool {
        matches!(self, Role::DvOfficial | Role::DvNonOfficial)
    }

    /// Check if this is one of the three terminal roles
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Role::AuthenticationTerminal | Role::InspectionTerminal | Role::SignatureTerminal
        )
    }
}

/// Terminal types identified by the CHAT object identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalType {
    /// id-IS
    InspectionSystem,
    /// id-AT
    AuthenticationTerminal,
    /// id-ST
    SignatureTerminal,
}

impl TerminalType {
    /// Look up the terminal type for a CHAT object identifier
    pub fn from_oid(oid: &str) -> Option<Self> {
        match oid {
            ID_IS_OID_STR => Some(TerminalType::InspectionSystem),
            ID_AT_OID_STR => Some(TerminalType::AuthenticationTerminal),
            ID_ST_OID_STR => Some(TerminalType::SignatureTerminal),
            _ => None,
        }
    }

    /// Get the object identifier of this terminal type
    pub fn oid(&self) -> Oid {
        match self {
            TerminalType::InspectionSystem => Oid::new_unchecked(ID_IS_OID.into()),
            TerminalType::AuthenticationTerminal => Oid::new_unchecked(ID_AT_OID.into()),
            TerminalType::SignatureTerminal => Oid::new_unchecked(ID_ST_OID.into()),
        }
    }

    /// Get the role a template with cleared role bits decodes to
    pub fn terminal_role(&self) -> Role {
        match self {
            TerminalType::InspectionSystem => Role::InspectionTerminal,
            TerminalType::AuthenticationTerminal => Role::AuthenticationTerminal,
            TerminalType::SignatureTerminal => Role::SignatureTerminal,
        }
    }
}

/// eID application data groups addressable by an authentication terminal
/// (TR-03110-2 A.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum DataGroup {
    Dg01, Dg02, Dg03, Dg04, Dg05, Dg06, Dg07,
    Dg08, Dg09, Dg10, Dg11, Dg12, Dg13, Dg14,
    Dg15, Dg16, Dg17, Dg18, Dg19, Dg20, Dg21,
}

impl DataGroup {
    pub const COUNT: usize = 21;

    #[rustfmt::skip]
    pub const ALL: [DataGroup; Self::COUNT] = [
        DataGroup::Dg01, DataGroup::Dg02, DataGroup::Dg03, DataGroup::Dg04,
        DataGroup::Dg05, DataGroup::Dg06, DataGroup::Dg07, DataGroup::Dg08,
        DataGroup::Dg09, DataGroup::Dg10, DataGroup::Dg11, DataGroup::Dg12,
        DataGroup::Dg13, DataGroup::Dg14, DataGroup::Dg15, DataGroup::Dg16,
        DataGroup::Dg17, DataGroup::Dg18, DataGroup::Dg19, DataGroup::Dg20,
        DataGroup::Dg21,
    ];

    /// One-based data group number
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Special functions of an authentication terminal (TR-03110-3 C.4.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialFunction {
    InstallQualifiedCertificate,
    InstallCertificate,
    PinManagement,
    CanAllowed,
    PrivilegedTerminal,
    RestrictedIdentification,
    CommunityIdVerification,
    AgeVerification,
}

impl SpecialFunction {
    pub const COUNT: usize = 8;

    pub const ALL: [SpecialFunction; Self::COUNT] = [
        SpecialFunction::InstallQualifiedCertificate,
        SpecialFunction::InstallCertificate,
        SpecialFunction::PinManagement,
        SpecialFunction::CanAllowed,
        SpecialFunction::PrivilegedTerminal,
        SpecialFunction::RestrictedIdentification,
        SpecialFunction::CommunityIdVerification,
        SpecialFunction::AgeVerification,
    ];

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Access rights of inspection systems and signature terminals
/// (TR-03110-3 C.4.1, C.4.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessRight {
    /// Read access to ePassport DG 3 (fingerprint)
    Dg03,
    /// Read access to ePassport DG 4 (iris)
    Dg04,
    /// Generate electronic signature
    GenerateSignature,
    /// Generate qualified electronic signature
    GenerateQualifiedSignature,
}

impl AccessRight {
    pub const COUNT: usize = 4;

    pub const ALL: [AccessRight; Self::COUNT] = [
        AccessRight::Dg03,
        AccessRight::Dg04,
        AccessRight::GenerateSignature,
        AccessRight::GenerateQualifiedSignature,
    ];

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Calendar date of a CV certificate validity period (no time component)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Create a new date.
    ///
    /// Year must be in range 2000-2099.
    /// Month must be in range 1-12.
    /// Day must be in range 1-31.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, Error> {
        if !(2000..=2099).contains(&year) {
            return Err(Error::InvalidData(format!(
                "Year out of range [2000-2099]: {year}",
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidData(format!("Invalid month: {month}")));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::InvalidData(format!("Invalid day: {day}")));
        }
        let max_days = match month {
            2 => {
                if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                    29 // Leap year
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        if day > max_days {
            return Err(Error::InvalidData(format!(
                "Invalid day for month {month}: {day}",
            )));
        }

        Ok(Self { year, month, day })
    }

    /// Create from a UTC timestamp, dropping the time of day
    pub fn from_datetime(dt: UtcDateTime) -> Self {
        Self {
            year: dt.year() as u16,
            month: dt.month() as u8,
            day: dt.day(),
        }
    }

    /// Create from the current date
    pub fn now() -> Self {
        Self::from_datetime(UtcDateTime::now())
    }

    /// Convert to unpacked BCD format (YYMMDD, 6 bytes)
    pub fn to_bcd(&self) -> [u8; 6] {
        let yy = (self.year % 100) as u8;
        let mm = self.month;
        let dd = self.day;

        [
            (yy / 10) & 0x0F,
            (yy % 10) & 0x0F,
            (mm / 10) & 0x0F,
            (mm % 10) & 0x0F,
            (dd / 10) & 0x0F,
            (dd % 10) & 0x0F,
        ]
    }

    /// Create from unpacked BCD format (YYMMDD, 6 bytes)
    pub fn from_bcd(bcd: &[u8]) -> Result<Self, Error> {
        if bcd.len() != 6 {
            return Err(Error::InvalidData(format!(
                "Invalid BCD date length: {}. Expected 6.",
                bcd.len(),
            )));
        }

        // low nibble holds the digit; high nibble must be zero per "unpacked BCD"
        let digits: [u8; 6] = {
            let mut digits = [0u8; 6];
            for (i, byte) in bcd.iter().enumerate() {
                let d = byte & 0x0F;
                if byte >> 4 != 0 || d > 9 {
                    return Err(Error::InvalidData(format!(
                        "Invalid unpacked BCD at position {i}: 0x{byte:02x}"
                    )));
                }
                digits[i] = d;
            }
            digits
        };

        let year = 2000 + (digits[0] as u16) * 10 + digits[1] as u16;
        let month = digits[2] * 10 + digits[3];
        let day = digits[4] * 10 + digits[5];

        Date::new(year, month, day)
    }

    /// Get year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Get month
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Get day
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation_valid() {
        let date = Date::new(2025, 9, 2).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 2);
    }

    #[test]
    fn test_date_creation_invalid_date_data() {
        // valid years are 2000-2099 (TR-03110-3 section D.2.1.3)
        assert!(Date::new(1999, 1, 1).is_err());
        assert!(Date::new(2100, 1, 1).is_err());

        // valid months are 1-12
        assert!(Date::new(2025, 0, 1).is_err());
        assert!(Date::new(2025, 13, 1).is_err());

        // valid days are 1-31
        assert!(Date::new(2025, 9, 0).is_err());
        assert!(Date::new(2025, 9, 32).is_err());

        // February in non-leap year
        assert!(Date::new(2023, 2, 29).is_err());
        assert!(Date::new(2023, 2, 28).is_ok());

        // February in leap year
        assert!(Date::new(2024, 2, 29).is_ok());
        assert!(Date::new(2024, 2, 30).is_err());
    }

    #[test]
    fn test_date_bcd_round_trip() {
        let original = Date::new(2045, 7, 3).unwrap();
        let bcd = original.to_bcd();
        assert_eq!(bcd, [4, 5, 0, 7, 0, 3]);

        let decoded = Date::from_bcd(&bcd).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_date_from_bcd_invalid() {
        // wrong length
        assert!(Date::from_bcd(&[2, 3, 1, 2, 2]).is_err());
        // high nibble set
        assert!(Date::from_bcd(&[2, 3, 1, 2, 2, 0x15]).is_err());
        // digit above 9
        assert!(Date::from_bcd(&[2, 3, 1, 2, 2, 0x0A]).is_err());
    }

    #[test]
    fn test_date_ordering() {
        let earlier = Date::new(2025, 1, 31).unwrap();
        let later = Date::new(2025, 2, 1).unwrap();
        assert!(earlier < later);
        assert!(later > earlier);
    }

    #[test]
    fn test_date_display() {
        let date = Date::new(2025, 9, 2).unwrap();
        assert_eq!(format!("{date}"), "2025-09-02");
    }

    #[test]
    fn test_terminal_type_oid_round_trip() {
        for tt in [
            TerminalType::InspectionSystem,
            TerminalType::AuthenticationTerminal,
            TerminalType::SignatureTerminal,
        ] {
            assert_eq!(TerminalType::from_oid(&tt.oid().to_string()), Some(tt));
        }
        assert_eq!(TerminalType::from_oid("1.2.3.4"), None);
    }
}
