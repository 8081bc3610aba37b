//! Release builder

use crate::domain::entities::manifest::Release;

pub const DIRECTOR_RELEASE: &str = "bosh";
pub const CPI_RELEASE: &str = "bosh-aws-cpi";

const DIRECTOR_RELEASE_URL: &str = "https://bosh.io/d/github.com/cloudfoundry/bosh?v=255.3";
const CPI_RELEASE_URL: &str =
    "https://bosh.io/d/github.com/cloudfoundry-incubator/bosh-aws-cpi-release?v=44";

pub fn build() -> Vec<Release> {
    vec![
        Release {
            name: DIRECTOR_RELEASE.to_string(),
            url: DIRECTOR_RELEASE_URL.to_string(),
            sha1: None,
        },
        Release {
            name: CPI_RELEASE.to_string(),
            url: CPI_RELEASE_URL.to_string(),
            sha1: None,
        },
    ]
}
