use rasn::types::OctetString;

use super::errors::Error;
use super::types::{AccessRight, CvcResult, DataGroup, Role, SpecialFunction, TerminalType};
use crate::asn1::ChatTemplate;

// Bit positions are MSB first across the discretionary data octets:
// position 0 is the most significant bit of byte 0 (TR-03110-3 C.4).
// The tables make the bit-to-right assignment explicit instead of relying
// on any map iteration order.

/// Write access to eID data groups 17 to 21, byte 0 of the AT template
const WRITE_ACCESS_BITS: [(DataGroup, usize); 5] = [
    (DataGroup::Dg17, 2),
    (DataGroup::Dg18, 3),
    (DataGroup::Dg19, 4),
    (DataGroup::Dg20, 5),
    (DataGroup::Dg21, 6),
];

/// Read access to eID data groups 1 to 21, bytes 1 to 3 of the AT template
const READ_ACCESS_BITS: [(DataGroup, usize); 21] = [
    (DataGroup::Dg01, 31),
    (DataGroup::Dg02, 30),
    (DataGroup::Dg03, 29),
    (DataGroup::Dg04, 28),
    (DataGroup::Dg05, 27),
    (DataGroup::Dg06, 26),
    (DataGroup::Dg07, 25),
    (DataGroup::Dg08, 24),
    (DataGroup::Dg09, 23),
    (DataGroup::Dg10, 22),
    (DataGroup::Dg11, 21),
    (DataGroup::Dg12, 20),
    (DataGroup::Dg13, 19),
    (DataGroup::Dg14, 18),
    (DataGroup::Dg15, 17),
    (DataGroup::Dg16, 16),
    (DataGroup::Dg17, 15),
    (DataGroup::Dg18, 14),
    (DataGroup::Dg19, 13),
    (DataGroup::Dg20, 12),
    (DataGroup::Dg21, 11),
];

/// Special functions, byte 4 of the AT template
const SPECIAL_FUNCTION_BITS: [(SpecialFunction, usize); 8] = [
    (SpecialFunction::InstallQualifiedCertificate, 32),
    (SpecialFunction::InstallCertificate, 33),
    (SpecialFunction::PinManagement, 34),
    (SpecialFunction::CanAllowed, 35),
    (SpecialFunction::PrivilegedTerminal, 36),
    (SpecialFunction::RestrictedIdentification, 37),
    (SpecialFunction::CommunityIdVerification, 38),
    (SpecialFunction::AgeVerification, 39),
];

fn is_bit_set(data: &[u8], position: usize) -> bool {
    data[position / 8] & (0x80 >> (position % 8)) != 0
}

fn set_bit(data: &mut [u8], position: usize) {
    data[position / 8] |= 0x80 >> (position % 8);
}

/// Certificate Holder Authorization Template (CHAT)
///
/// Carries the role of a certificate holder and the access rights granted
/// to it (TR-03110-3 C.4). Every rights table always contains all of its
/// keys; a right that is not proven by the template bits stays `false`.
///
/// Equality compares the encoded form, so two CHATs are equal exactly
/// when they are indistinguishable on the wire.
#[derive(Debug, Clone)]
pub struct Chat {
    terminal_type: TerminalType,
    role: Role,
    write_access: [bool; DataGroup::COUNT],
    read_access: [bool; DataGroup::COUNT],
    special_functions: [bool; SpecialFunction::COUNT],
    access_rights: [bool; AccessRight::COUNT],
}

impl Chat {
    /// Create a CHAT with the plain terminal role and no rights granted
    pub fn new(terminal_type: TerminalType) -> Self {
        Self {
            terminal_type,
            role: terminal_type.terminal_role(),
            write_access: [false; DataGroup::COUNT],
            read_access: [false; DataGroup::COUNT],
            special_functions: [false; SpecialFunction::COUNT],
            access_rights: [false; AccessRight::COUNT],
        }
    }

    /// Decode a CHAT from its DER encoding
    pub fn from_der(data: &[u8]) -> CvcResult<Self> {
        let template: ChatTemplate = rasn::der::decode(data)?;
        Self::from_template(&template)
    }

    /// Decode a CHAT from hex encoded DER
    pub fn from_hex(hex_data: impl AsRef<str>) -> CvcResult<Self> {
        let data = hex::decode(hex_data.as_ref())?;
        Self::from_der(&data)
    }

    pub(crate) fn from_template(template: &ChatTemplate) -> CvcResult<Self> {
        let oid = template.oid.to_string();
        let terminal_type = TerminalType::from_oid(&oid).ok_or(Error::UndefinedRole(oid))?;

        let data = template.template.as_ref();
        let required = match terminal_type {
            TerminalType::AuthenticationTerminal => 5,
            _ => 1,
        };
        if data.len() < required {
            return Err(Error::InvalidData(format!(
                "CHAT discretionary data too short: {} bytes",
                data.len(),
            )));
        }

        let mut chat = Chat::new(terminal_type);
        chat.role = parse_role(data[0], terminal_type);

        match terminal_type {
            TerminalType::InspectionSystem => {
                // Read access to ePassport application: DG 4 (iris), DG 3 (fingerprint)
                chat.access_rights[AccessRight::Dg04.index()] = is_bit_set(data, 6);
                chat.access_rights[AccessRight::Dg03.index()] = is_bit_set(data, 7);
            }
            TerminalType::SignatureTerminal => {
                chat.access_rights[AccessRight::GenerateQualifiedSignature.index()] =
                    is_bit_set(data, 6);
                chat.access_rights[AccessRight::GenerateSignature.index()] = is_bit_set(data, 7);
            }
            TerminalType::AuthenticationTerminal => {
                for (group, position) in WRITE_ACCESS_BITS {
                    chat.write_access[group.index()] = is_bit_set(data, position);
                }
                for (group, position) in READ_ACCESS_BITS {
                    chat.read_access[group.index()] = is_bit_set(data, position);
                }
                for (function, position) in SPECIAL_FUNCTION_BITS {
                    chat.special_functions[function.index()] = is_bit_set(data, position);
                }
            }
        }

        Ok(chat)
    }

    /// Get the DER encoding of the CHAT
    pub fn to_der(&self) -> Vec<u8> {
        let template = ChatTemplate {
            oid: self.terminal_type.oid(),
            template: OctetString::from(self.template_bytes()),
        };
        // encoding a well-formed template cannot fail
        rasn::der::encode(&template).unwrap()
    }

    /// Get the hex encoded DER form of the CHAT
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_der())
    }

    fn template_bytes(&self) -> Vec<u8> {
        let role_bits: u8 = match self.role {
            Role::Cvca => 0xC0,
            Role::DvOfficial => 0x80,
            Role::DvNonOfficial => 0x40,
            _ => 0x00,
        };

        match self.terminal_type {
            TerminalType::InspectionSystem => {
                let mut byte = role_bits;
                if self.access_rights[AccessRight::Dg04.index()] {
                    byte |= 0x02;
                }
                if self.access_rights[AccessRight::Dg03.index()] {
                    byte |= 0x01;
                }
                vec![byte]
            }
            TerminalType::SignatureTerminal => {
                let mut byte = role_bits;
                if self.access_rights[AccessRight::GenerateQualifiedSignature.index()] {
                    byte |= 0x02;
                }
                if self.access_rights[AccessRight::GenerateSignature.index()] {
                    byte |= 0x01;
                }
                vec![byte]
            }
            TerminalType::AuthenticationTerminal => {
                let mut data = vec![0u8; 5];
                data[0] = role_bits;
                for (group, position) in WRITE_ACCESS_BITS {
                    if self.write_access[group.index()] {
                        set_bit(&mut data, position);
                    }
                }
                for (group, position) in READ_ACCESS_BITS {
                    if self.read_access[group.index()] {
                        set_bit(&mut data, position);
                    }
                }
                for (function, position) in SPECIAL_FUNCTION_BITS {
                    if self.special_functions[function.index()] {
                        set_bit(&mut data, position);
                    }
                }
                data
            }
        }
    }

    /// Returns the role of the certificate holder
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the terminal type identified by the CHAT object identifier
    pub fn terminal_type(&self) -> TerminalType {
        self.terminal_type
    }

    /// Returns the object identifier of the CHAT
    pub fn oid(&self) -> rasn::types::ObjectIdentifier {
        self.terminal_type.oid()
    }

    /// Check write access to an eID data group
    pub fn write_access(&self, group: DataGroup) -> bool {
        self.write_access[group.index()]
    }

    /// Check read access to an eID data group
    pub fn read_access(&self, group: DataGroup) -> bool {
        self.read_access[group.index()]
    }

    /// Check whether a special function is granted
    pub fn special_function(&self, function: SpecialFunction) -> bool {
        self.special_functions[function.index()]
    }

    /// Check an inspection system / signature terminal access right
    pub fn access_right(&self, right: AccessRight) -> bool {
        self.access_rights[right.index()]
    }

    /// Set write access to an eID data group.
    ///
    /// Only data groups 17 to 21 are writable; returns false for any
    /// other group and leaves the CHAT unchanged.
    pub fn set_write_access(&mut self, group: DataGroup, selected: bool) -> bool {
        if WRITE_ACCESS_BITS.iter().any(|(g, _)| *g == group) {
            self.write_access[group.index()] = selected;
            return true;
        }
        false
    }

    /// Set read access to an eID data group
    pub fn set_read_access(&mut self, group: DataGroup, selected: bool) {
        self.read_access[group.index()] = selected;
    }

    /// Set a special function
    pub fn set_special_function(&mut self, function: SpecialFunction, selected: bool) {
        self.special_functions[function.index()] = selected;
    }

    /// Set an inspection system / signature terminal access right
    pub fn set_access_right(&mut self, right: AccessRight, selected: bool) {
        self.access_rights[right.index()] = selected;
    }

    /// Restrict this CHAT by using the given CHAT as a mask.
    ///
    /// Every right that is false in the mask is cleared here, key by key
    /// across all four rights tables. The role and terminal type are not
    /// touched. Restricting twice with the same mask gives the same
    /// result as restricting once.
    pub fn restrict_access_rights(&mut self, mask: &Chat) {
        remove_rights(&mut self.write_access, &mask.write_access);
        remove_rights(&mut self.read_access, &mask.read_access);
        remove_rights(&mut self.special_functions, &mask.special_functions);
        remove_rights(&mut self.access_rights, &mask.access_rights);
    }
}

fn remove_rights<const N: usize>(rights: &mut [bool; N], mask: &[bool; N]) {
    for (right, allowed) in rights.iter_mut().zip(mask) {
        if !allowed {
            *right = false;
        }
    }
}

fn parse_role(role_byte: u8, terminal_type: TerminalType) -> Role {
    match role_byte & 0xC0 {
        0xC0 => Role::Cvca,
        0x80 => Role::DvOfficial,
        0x40 => Role::DvNonOfficial,
        _ => terminal_type.terminal_role(),
    }
}

impl PartialEq for Chat {
    fn eq(&self, other: &Self) -> bool {
        self.to_der() == other.to_der()
    }
}

impl Eq for Chat {}
