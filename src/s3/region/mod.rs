use std::{env, fmt, str::FromStr};

// https://docs.aws.amazon.com/general/latest/gr/rande.html#regional-endpoints
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    // Africa (Cape Town)           af-south-1
    AfSouth1,

    // Asia Pacific (Hong Kong)     ap-east-1
    ApEast1,

    // Asia Pacific (Tokyo)         ap-northeast-1
    ApNortheast1,

    // Asia Pacific (Seoul)         ap-northeast-2
    ApNortheast2,

    // Asia Pacific (Osaka)         ap-northeast-3
    ApNortheast3,

    // Asia Pacific (Mumbai)        ap-south-1
    ApSouth1,

    // Asia Pacific (Hyderabad)     ap-south-2
    ApSouth2,

    // Asia Pacific (Singapore)     ap-southeast-1
    ApSoutheast1,

    // Asia Pacific (Sydney)        ap-southeast-2
    ApSoutheast2,

    // Asia Pacific (Jakarta)       ap-southeast-3
    ApSoutheast3,

    // Asia Pacific (Melbourne)     ap-southeast-4
    ApSoutheast4,

    // Canada (Central)             ca-central-1
    CaCentral1,

    // China (Beijing)              cn-north-1
    CnNorth1,

    // China (Ningxia)              cn-northwest-1
    CnNorthwest1,

    // Europe (Frankfurt)           eu-central-1
    EuCentral1,

    // Europe (Zurich)              eu-central-2
    EuCentral2,

    // Europe (Stockholm)           eu-north-1
    EuNorth1,

    // Europe (Milan)               eu-south-1
    EuSouth1,

    // Europe (Spain)               eu-south-2
    EuSouth2,

    // Europe (Ireland)             eu-west-1
    EuWest1,

    // Europe (London)              eu-west-2
    EuWest2,

    // Europe (Paris)               eu-west-3
    EuWest3,

    // Israel (Tel Aviv)            il-central-1
    IlCentral1,

    // Middle East (UAE)            me-central-1
    MeCentral1,

    // Middle East (Bahrain)        me-south-1
    MeSouth1,

    // South America (Sao Paulo)    sa-east-1
    SaEast1,

    // US East (N. Virginia)        us-east-1
    UsEast1,

    // US East (Ohio)               us-east-2
    UsEast2,

    // AWS GovCloud (US-East)       us-gov-east-1
    UsGovEast1,

    // AWS GovCloud (US-West)       us-gov-west-1
    UsGovWest1,

    // US West (N. California)      us-west-1
    UsWest1,

    // US West (Oregon)             us-west-2
    UsWest2,

    // Custom region, endpoint
    Custom { name: String, endpoint: String },
}

impl Region {
    #[must_use]
    pub fn name(&self) -> &str {
        match *self {
            Self::AfSouth1 => "af-south-1",
            Self::ApEast1 => "ap-east-1",
            Self::ApNortheast1 => "ap-northeast-1",
            Self::ApNortheast2 => "ap-northeast-2",
            Self::ApNortheast3 => "ap-northeast-3",
            Self::ApSouth1 => "ap-south-1",
            Self::ApSouth2 => "ap-south-2",
            Self::ApSoutheast1 => "ap-southeast-1",
            Self::ApSoutheast2 => "ap-southeast-2",
            Self::ApSoutheast3 => "ap-southeast-3",
            Self::ApSoutheast4 => "ap-southeast-4",
            Self::CaCentral1 => "ca-central-1",
            Self::CnNorth1 => "cn-north-1",
            Self::CnNorthwest1 => "cn-northwest-1",
            Self::EuCentral1 => "eu-central-1",
            Self::EuCentral2 => "eu-central-2",
            Self::EuNorth1 => "eu-north-1",
            Self::EuSouth1 => "eu-south-1",
            Self::EuSouth2 => "eu-south-2",
            Self::EuWest1 => "eu-west-1",
            Self::EuWest2 => "eu-west-2",
            Self::EuWest3 => "eu-west-3",
            Self::IlCentral1 => "il-central-1",
            Self::MeCentral1 => "me-central-1",
            Self::MeSouth1 => "me-south-1",
            Self::SaEast1 => "sa-east-1",
            Self::UsEast1 => "us-east-1",
            Self::UsEast2 => "us-east-2",
            Self::UsGovEast1 => "us-gov-east-1",
            Self::UsGovWest1 => "us-gov-west-1",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::Custom { ref name, .. } => name,
        }
    }

    /// Host of the S3 service, custom endpoints are returned as configured
    #[must_use]
    pub fn endpoint(&self) -> String {
        match *self {
            Self::Custom { ref endpoint, .. } => endpoint.to_string(),
            _ => format!("s3.{}.amazonaws.com", self.name()),
        }
    }
}

impl Region {
    /// Every AWS region, `Custom` excluded
    pub const KNOWN: [Self; 32] = [
        Self::AfSouth1,
        Self::ApEast1,
        Self::ApNortheast1,
        Self::ApNortheast2,
        Self::ApNortheast3,
        Self::ApSouth1,
        Self::ApSouth2,
        Self::ApSoutheast1,
        Self::ApSoutheast2,
        Self::ApSoutheast3,
        Self::ApSoutheast4,
        Self::CaCentral1,
        Self::CnNorth1,
        Self::CnNorthwest1,
        Self::EuCentral1,
        Self::EuCentral2,
        Self::EuNorth1,
        Self::EuSouth1,
        Self::EuSouth2,
        Self::EuWest1,
        Self::EuWest2,
        Self::EuWest3,
        Self::IlCentral1,
        Self::MeCentral1,
        Self::MeSouth1,
        Self::SaEast1,
        Self::UsEast1,
        Self::UsEast2,
        Self::UsGovEast1,
        Self::UsGovWest1,
        Self::UsWest1,
        Self::UsWest2,
    ];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Not a valid AWS region: {0}")]
pub struct ParseRegionError(String);

// case insensitive, custom endpoints are only built from the config
impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        Self::KNOWN
            .into_iter()
            .find(|region| region.name() == name)
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}

// AWS_DEFAULT_REGION, then AWS_REGION, us-east-1 when unset or unknown
impl Default for Region {
    fn default() -> Self {
        env::var("AWS_DEFAULT_REGION")
            .or_else(|_| env::var("AWS_REGION"))
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::UsEast1)
    }
}
