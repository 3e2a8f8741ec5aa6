//! Static registry of DMAP content codes.
//!
//! The table maps 4-byte tag codes to their declared semantic type and
//! display name. It is fixed at compile time and never mutated, so
//! lookups are pure and thread-safe. Codes missing from the table are
//! handled by synthesizing an [`TagDefinition::unknown`] definition at
//! decode time rather than failing the parse.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A 4-byte DMAP tag code, conventionally printable ASCII.
///
/// # Examples
/// ```
/// use dmap_core::TagCode;
///
/// let code: TagCode = "minm".parse()?;
/// assert_eq!(code, TagCode::new(*b"minm"));
/// assert_eq!(code.to_string(), "minm");
/// assert!("toolong".parse::<TagCode>().is_err());
/// # Ok::<(), dmap_core::TagCodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagCode([u8; 4]);

impl TagCode {
    /// Wrap raw code bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// The raw code bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            if byte == b' ' || byte.is_ascii_graphic() {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for TagCode {
    type Err = TagCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        match <[u8; 4]>::try_from(bytes) {
            Ok(code) if bytes.iter().all(u8::is_ascii) => Ok(Self(code)),
            _ => Err(TagCodeError(s.to_string())),
        }
    }
}

impl Serialize for TagCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Rejected tag code text (must be exactly 4 ASCII bytes).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tag code must be exactly 4 ASCII bytes, got {0:?}")]
pub struct TagCodeError(pub String);

/// Declared interpretation of a tag's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Payload is a nested TLV sequence.
    Container,
    /// Unsigned 8-bit integer.
    Byte,
    /// Unsigned 16-bit integer, big-endian.
    UInt16,
    /// Unsigned 32-bit integer, big-endian.
    UInt32,
    /// Unsigned 64-bit integer, big-endian.
    UInt64,
    /// One byte; `false` iff `0x00`.
    Bool,
    /// Arbitrary bytes shown as lowercase hex.
    Hex,
    /// UTF-8 text.
    String,
    /// 32-bit big-endian Unix epoch seconds.
    Date,
    /// Version triple packed into 4 bytes.
    Version,
    /// No published interpretation; decoded heuristically.
    Unknown,
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticType::Container => "container",
            SemanticType::Byte => "byte",
            SemanticType::UInt16 => "uint16",
            SemanticType::UInt32 => "uint32",
            SemanticType::UInt64 => "uint64",
            SemanticType::Bool => "bool",
            SemanticType::Hex => "hex",
            SemanticType::String => "string",
            SemanticType::Date => "date",
            SemanticType::Version => "version",
            SemanticType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One registry entry: code, declared type, and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagDefinition {
    /// The 4-byte wire code.
    pub code: TagCode,
    /// Declared payload interpretation.
    #[serde(rename = "type")]
    pub kind: SemanticType,
    /// Dotted protocol name, e.g. `dmap.itemname`.
    pub name: &'static str,
}

impl TagDefinition {
    /// Synthetic definition for a code absent from the registry.
    pub const fn unknown(code: TagCode) -> Self {
        Self {
            code,
            kind: SemanticType::Unknown,
            name: "unknown",
        }
    }
}

const fn def(code: &[u8; 4], kind: SemanticType, name: &'static str) -> TagDefinition {
    TagDefinition {
        code: TagCode::new(*code),
        kind,
        name,
    }
}

use self::SemanticType as T;

static TAGS: &[TagDefinition] = &[
    // dmap containers
    def(b"msrv", T::Container, "dmap.serverinforesponse"),
    def(b"mccr", T::Container, "dmap.contentcodesresponse"),
    def(b"mdcl", T::Container, "dmap.dictionary"),
    def(b"mlog", T::Container, "dmap.loginresponse"),
    def(b"mupd", T::Container, "dmap.updateresponse"),
    def(b"mlcl", T::Container, "dmap.listing"),
    def(b"mlit", T::Container, "dmap.listingitem"),
    def(b"mbcl", T::Container, "dmap.bag"),
    def(b"mcon", T::Container, "dmap.container"),
    // daap/dacp containers
    def(b"avdb", T::Container, "daap.serverdatabases"),
    def(b"adbs", T::Container, "daap.databasesongs"),
    def(b"aply", T::Container, "daap.databaseplaylists"),
    def(b"apso", T::Container, "daap.playlistsongs"),
    def(b"abro", T::Container, "daap.databasebrowse"),
    def(b"agal", T::Container, "daap.albumgrouping"),
    def(b"cmst", T::Container, "dmcp.playstatus"),
    def(b"cmgt", T::Container, "dmcp.getpropertyresponse"),
    def(b"caci", T::Container, "dacp.controlint"),
    def(b"cmpa", T::Container, "dacp.pairinganswer"),
    // strings
    def(b"minm", T::String, "dmap.itemname"),
    def(b"mcna", T::String, "dmap.contentcodesname"),
    def(b"msts", T::String, "dmap.statusstring"),
    def(b"asal", T::String, "daap.songalbum"),
    def(b"asar", T::String, "daap.songartist"),
    def(b"ascm", T::String, "daap.songcomment"),
    def(b"asfm", T::String, "daap.songformat"),
    def(b"asgn", T::String, "daap.songgenre"),
    def(b"cann", T::String, "dacp.nowplayingname"),
    def(b"cana", T::String, "dacp.nowplayingartist"),
    def(b"canl", T::String, "dacp.nowplayingalbum"),
    def(b"cang", T::String, "dacp.nowplayinggenre"),
    def(b"cmnm", T::String, "dacp.devicename"),
    def(b"cmty", T::String, "dacp.devicetype"),
    // bytes
    def(b"mikd", T::Byte, "dmap.itemkind"),
    def(b"msas", T::Byte, "dmap.authenticationschemes"),
    def(b"msau", T::Byte, "dmap.authenticationmethod"),
    def(b"muty", T::Byte, "dmap.updatetype"),
    def(b"asdk", T::Byte, "daap.songdatakind"),
    def(b"asur", T::Byte, "daap.songuserrating"),
    def(b"caps", T::Byte, "dacp.playerstate"),
    def(b"cash", T::Byte, "dacp.shufflestate"),
    def(b"carp", T::Byte, "dacp.repeatstate"),
    // uint16
    def(b"asbr", T::UInt16, "daap.songbitrate"),
    def(b"asbt", T::UInt16, "daap.songbeatsperminute"),
    def(b"asdc", T::UInt16, "daap.songdisccount"),
    def(b"asdn", T::UInt16, "daap.songdiscnumber"),
    def(b"astc", T::UInt16, "daap.songtrackcount"),
    def(b"astn", T::UInt16, "daap.songtracknumber"),
    def(b"asyr", T::UInt16, "daap.songyear"),
    // uint32
    def(b"mstt", T::UInt32, "dmap.status"),
    def(b"miid", T::UInt32, "dmap.itemid"),
    def(b"mcti", T::UInt32, "dmap.containeritemid"),
    def(b"mpco", T::UInt32, "dmap.parentcontainerid"),
    def(b"mimc", T::UInt32, "dmap.itemcount"),
    def(b"mrco", T::UInt32, "dmap.returnedcount"),
    def(b"mtco", T::UInt32, "dmap.specifiedtotalcount"),
    def(b"msdc", T::UInt32, "dmap.databasescount"),
    def(b"mstm", T::UInt32, "dmap.timeoutinterval"),
    def(b"mlid", T::UInt32, "dmap.sessionid"),
    def(b"musr", T::UInt32, "dmap.serverrevision"),
    def(b"astm", T::UInt32, "daap.songtime"),
    def(b"assz", T::UInt32, "daap.songsize"),
    def(b"assr", T::UInt32, "daap.songsamplerate"),
    def(b"cmsr", T::UInt32, "dmcp.serverrevision"),
    def(b"cmvo", T::UInt32, "dmcp.volume"),
    def(b"cant", T::UInt32, "dacp.nowplayingremainingtime"),
    def(b"cast", T::UInt32, "dacp.songtime"),
    // uint64
    def(b"mper", T::UInt64, "dmap.persistentid"),
    // bools
    def(b"mslr", T::Bool, "dmap.loginrequired"),
    def(b"msal", T::Bool, "dmap.supportsautologout"),
    def(b"msup", T::Bool, "dmap.supportsupdate"),
    def(b"mspi", T::Bool, "dmap.supportspersistentids"),
    def(b"msex", T::Bool, "dmap.supportsextensions"),
    def(b"msbr", T::Bool, "dmap.supportsbrowse"),
    def(b"msqy", T::Bool, "dmap.supportsquery"),
    def(b"msix", T::Bool, "dmap.supportsindex"),
    def(b"msrs", T::Bool, "dmap.supportsresolve"),
    def(b"aeSP", T::Bool, "com.apple.itunes.smart-playlist"),
    // versions
    def(b"mpro", T::Version, "dmap.protocolversion"),
    def(b"apro", T::Version, "daap.protocolversion"),
    def(b"ppro", T::Version, "dpap.protocolversion"),
    // dates
    def(b"mstc", T::Date, "dmap.utctime"),
    def(b"asda", T::Date, "daap.songdateadded"),
    def(b"asdm", T::Date, "daap.songdatemodified"),
    // hex
    def(b"cmpg", T::Hex, "dacp.pairingguid"),
    // observed on the wire, interpretation unpublished
    def(b"canp", T::Unknown, "dacp.nowplayingids"),
    def(b"cmik", T::Unknown, "dmcp.cmik"),
    def(b"ceSG", T::Unknown, "com.apple.itunes.saved-genius"),
];

/// Look up a tag code in the static table.
///
/// Repeated lookups for the same code return equal definitions.
pub fn find(code: TagCode) -> Option<&'static TagDefinition> {
    TAGS.iter().find(|definition| definition.code == code)
}

/// All registered definitions, for enumeration in tests and tooling.
pub fn all() -> &'static [TagDefinition] {
    TAGS
}
