use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Pagination parameters for droplet listing.
///
/// Acts as the page token of the listing protocol: the default value requests the
/// first page, and each [`DropletPage`] tells the caller which page to ask for next.
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, per_page = 50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of droplets per page.
    pub per_page: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 50,
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `per_page` is clamped to `1..=max_per_page`
    #[must_use]
    pub fn validated(&self, max_per_page: u32) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, max_per_page),
        }
    }

    /// Parameters for `page`, keeping the page size.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            per_page: self.per_page,
        }
    }
}

/// One page of the droplet listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropletPage {
    /// Droplets on this page, in API order.
    pub droplets: Vec<Droplet>,
    /// Page number to request next; `None` when this is the last page.
    pub next_page: Option<u32>,
    /// Total droplet count reported by the API, if present.
    pub total: Option<u32>,
}

// ============ Provider Types ============

/// Identifies a supported cloud provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProviderType {
    /// `DigitalOcean` API v2.
    #[serde(rename = "digitalocean")]
    DigitalOcean,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigitalOcean => write!(f, "digitalocean"),
        }
    }
}

// ============ Droplet ============

/// Lifecycle status reported for a droplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropletStatus {
    /// Being provisioned.
    New,
    /// Running.
    Active,
    /// Powered off.
    Off,
    /// Archived; no longer running or billable.
    Archive,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for DropletStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Off => "off",
            Self::Archive => "archive",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Region a droplet runs in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Short identifier, e.g. `nyc3`.
    #[serde(default)]
    pub slug: String,
    /// Display name, e.g. `New York 3`.
    #[serde(default)]
    pub name: String,
}

/// Base image a droplet was created from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image id; absent for some snapshot-derived droplets.
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name, e.g. `22.04 (LTS) x64`.
    #[serde(default)]
    pub name: String,
    /// Distribution, e.g. `Ubuntu`.
    #[serde(default)]
    pub distribution: String,
    /// Public image slug, if any.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Whether an address is reachable from the internet or only inside the VPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Internet-facing address.
    Public,
    /// VPC-internal address.
    Private,
    /// An address type this client does not know about.
    #[serde(other)]
    Unknown,
}

/// An IPv4 interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkV4 {
    /// Dotted-quad address.
    pub ip_address: String,
    /// Dotted-quad netmask.
    #[serde(default)]
    pub netmask: String,
    /// Gateway address (may be the literal `nil` for private interfaces).
    #[serde(default)]
    pub gateway: String,
    /// Interface kind.
    #[serde(rename = "type")]
    pub network_type: NetworkType,
}

/// An IPv6 interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkV6 {
    /// Address in colon notation.
    pub ip_address: String,
    /// Prefix length.
    #[serde(default)]
    pub netmask: u32,
    /// Gateway address.
    #[serde(default)]
    pub gateway: String,
    /// Interface kind.
    #[serde(rename = "type")]
    pub network_type: NetworkType,
}

/// All network interfaces of a droplet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Networks {
    /// IPv4 interfaces.
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    /// IPv6 interfaces.
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

/// A droplet as returned by the listing endpoint.
///
/// Records are never edited after they are fetched; callers add or drop whole records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    /// Unique droplet id.
    pub id: u64,
    /// Human-readable name.
    pub name: String,
    /// Memory in MiB.
    #[serde(default)]
    pub memory: u64,
    /// Virtual CPU count.
    #[serde(default)]
    pub vcpus: u32,
    /// Disk size in GB.
    #[serde(default)]
    pub disk: u64,
    /// Whether the droplet is locked against actions.
    #[serde(default)]
    pub locked: bool,
    /// Lifecycle status.
    pub status: DropletStatus,
    /// Creation time.
    #[serde(default, with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// Enabled features such as `backups`, `ipv6`, `private_networking`.
    #[serde(default)]
    pub features: Vec<String>,
    /// Region the droplet lives in.
    #[serde(default)]
    pub region: Region,
    /// Base image.
    #[serde(default)]
    pub image: Image,
    /// Size slug, e.g. `s-1vcpu-1gb`.
    #[serde(default)]
    pub size_slug: String,
    /// Network interfaces.
    #[serde(default)]
    pub networks: Networks,
    /// User-assigned tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// VPC the droplet is attached to.
    #[serde(default)]
    pub vpc_uuid: Option<String>,
}

impl Droplet {
    fn ipv4_of(&self, network_type: NetworkType) -> Option<&str> {
        self.networks
            .v4
            .iter()
            .find(|n| n.network_type == network_type)
            .map(|n| n.ip_address.as_str())
    }

    /// First public IPv4 address.
    pub fn public_ipv4(&self) -> Option<&str> {
        self.ipv4_of(NetworkType::Public)
    }

    /// First private IPv4 address.
    pub fn private_ipv4(&self) -> Option<&str> {
        self.ipv4_of(NetworkType::Private)
    }

    /// First public IPv6 address.
    pub fn public_ipv6(&self) -> Option<&str> {
        self.networks
            .v6
            .iter()
            .find(|n| n.network_type == NetworkType::Public)
            .map(|n| n.ip_address.as_str())
    }

    /// Whether `feature` is listed in the droplet's enabled features.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// A droplet action that does not change the droplet list by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropletAction {
    /// Graceful reboot.
    Reboot,
    /// Graceful shutdown.
    Shutdown,
    /// Attach the droplet to its region's private network.
    EnablePrivateNetworking,
}

impl DropletAction {
    /// Value of the `type` field in the action request body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reboot => "reboot",
            Self::Shutdown => "shutdown",
            Self::EnablePrivateNetworking => "enable_private_networking",
        }
    }

    /// Short label for status messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Reboot => "Reboot",
            Self::Shutdown => "Shutdown",
            Self::EnablePrivateNetworking => "Enable private networking",
        }
    }
}

impl std::fmt::Display for DropletAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Provider Metadata Types ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Definition of a single credential field required by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable field key (e.g., `"apiToken"`).
    pub key: String,
    /// Human-readable label (e.g., `"API Token"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Optional placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional help/description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Provider-specific pagination limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLimits {
    /// Maximum page size for droplet list requests.
    pub max_per_page: u32,
}

/// Static metadata describing a provider.
///
/// Obtain via [`DropletProvider::metadata()`](crate::DropletProvider::metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider type identifier.
    pub id: ProviderType,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Credential fields required to authenticate with this provider.
    pub required_fields: Vec<ProviderCredentialField>,
    /// API pagination limits for this provider.
    pub limits: ProviderLimits,
}

// ============ Credential Types ============

/// Type-safe credential container for supported providers.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
///
/// # Serialization
///
/// ```json
/// { "provider": "digitalocean", "credentials": { "api_token": "..." } }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// `DigitalOcean` personal access token.
    #[serde(rename = "digitalocean")]
    DigitalOcean {
        /// API token sent as a bearer token.
        api_token: String,
    },
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigitalOcean { .. } => f
                .debug_struct("DigitalOcean")
                .field("api_token", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DROPLET_JSON: &str = r#"{
        "id": 3164444,
        "name": "example.com",
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "locked": false,
        "status": "active",
        "created_at": "2020-07-21T18:37:44Z",
        "features": ["backups", "private_networking", "ipv6"],
        "region": { "slug": "nyc3", "name": "New York 3", "available": true },
        "image": { "id": 63663980, "name": "20.04 (LTS) x64", "distribution": "Ubuntu", "slug": "ubuntu-20-04-x64" },
        "size_slug": "s-1vcpu-1gb",
        "networks": {
            "v4": [
                { "ip_address": "10.128.192.124", "netmask": "255.255.0.0", "gateway": "nil", "type": "private" },
                { "ip_address": "192.241.165.154", "netmask": "255.255.240.0", "gateway": "192.241.160.1", "type": "public" }
            ],
            "v6": [
                { "ip_address": "2604:a880:0:1010::18a:a001", "netmask": 64, "gateway": "2604:a880:0:1010::1", "type": "public" }
            ]
        },
        "tags": ["web", "env:prod"],
        "vpc_uuid": "760e09ef-dc84-11e8-981e-3cfdfeaae000"
    }"#;

    // ============ Droplet ============

    #[test]
    fn droplet_deserializes_api_shape() {
        let d: Droplet = serde_json::from_str(DROPLET_JSON).unwrap();
        assert_eq!(d.id, 3_164_444);
        assert_eq!(d.name, "example.com");
        assert_eq!(d.status, DropletStatus::Active);
        assert_eq!(d.region.slug, "nyc3");
        assert_eq!(d.image.distribution, "Ubuntu");
        assert_eq!(d.size_slug, "s-1vcpu-1gb");
        assert!(d.created_at.is_some());
        assert_eq!(d.tags, vec!["web".to_string(), "env:prod".to_string()]);
    }

    #[test]
    fn droplet_address_helpers() {
        let d: Droplet = serde_json::from_str(DROPLET_JSON).unwrap();
        assert_eq!(d.public_ipv4(), Some("192.241.165.154"));
        assert_eq!(d.private_ipv4(), Some("10.128.192.124"));
        assert_eq!(d.public_ipv6(), Some("2604:a880:0:1010::18a:a001"));
        assert!(d.has_feature("private_networking"));
        assert!(!d.has_feature("monitoring"));
    }

    #[test]
    fn droplet_minimal_record() {
        let d: Droplet = serde_json::from_str(r#"{"id":1,"name":"a","status":"new"}"#).unwrap();
        assert_eq!(d.status, DropletStatus::New);
        assert!(d.networks.v4.is_empty());
        assert_eq!(d.public_ipv4(), None);
        assert_eq!(d.created_at, None);
    }

    #[test]
    fn unknown_status_is_preserved_as_unknown() {
        let d: Droplet =
            serde_json::from_str(r#"{"id":1,"name":"a","status":"migrating"}"#).unwrap();
        assert_eq!(d.status, DropletStatus::Unknown);
    }

    // ============ Pagination ============

    #[test]
    fn pagination_defaults_to_first_page() {
        let p = PaginationParams::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 50);
    }

    #[test]
    fn pagination_validated_clamps() {
        let p = PaginationParams {
            page: 0,
            per_page: 500,
        }
        .validated(200);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 200);

        let p = PaginationParams {
            page: 3,
            per_page: 0,
        }
        .validated(200);
        assert_eq!(p.page, 3);
        assert_eq!(p.per_page, 1);
    }

    #[test]
    fn pagination_with_page_keeps_size() {
        let p = PaginationParams {
            page: 1,
            per_page: 20,
        }
        .with_page(4);
        assert_eq!(
            p,
            PaginationParams {
                page: 4,
                per_page: 20
            }
        );
    }

    // ============ Actions ============

    #[test]
    fn action_wire_names() {
        assert_eq!(DropletAction::Reboot.as_str(), "reboot");
        assert_eq!(DropletAction::Shutdown.as_str(), "shutdown");
        assert_eq!(
            DropletAction::EnablePrivateNetworking.as_str(),
            "enable_private_networking"
        );
        assert_eq!(
            serde_json::to_string(&DropletAction::EnablePrivateNetworking).unwrap(),
            "\"enable_private_networking\""
        );
    }

    // ============ Credentials ============

    #[test]
    fn credentials_debug_redacts_token() {
        let cred = ProviderCredentials::DigitalOcean {
            api_token: "dop_v1_secret".to_string(),
        };
        let dbg = format!("{cred:?}");
        assert!(!dbg.contains("dop_v1_secret"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn credentials_serialization_shape() {
        let cred = ProviderCredentials::DigitalOcean {
            api_token: "t".to_string(),
        };
        let json = serde_json::to_string(&cred).unwrap();
        assert_eq!(
            json,
            r#"{"provider":"digitalocean","credentials":{"api_token":"t"}}"#
        );
    }
}
