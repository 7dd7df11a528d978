//! Directory of NHS Integrated Care Board websites that can scope a search.
//!
//! The table is fixed at compile time. Lookups are by exact url; matching a
//! [`SearchResult`] against a site is intentionally loose (name substring of
//! `source`, or url prefix of the result url) and can over-match when one
//! site's name is contained in another's.

use crate::SearchResult;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SiteDescriptor {
    pub name: &'static str,
    pub url: &'static str,
    pub region: Option<&'static str>,
}

impl SiteDescriptor {
    pub fn host(&self) -> &'static str {
        let without_scheme = self
            .url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .unwrap_or(self.url);
        without_scheme.trim_end_matches('/')
    }

    /// Whether `result` is attributed to this site under the loose matching rule.
    pub fn covers(&self, result: &SearchResult) -> bool {
        result.source.contains(self.name) || result.url.starts_with(self.url)
    }
}

const fn site(name: &'static str, url: &'static str, region: &'static str) -> SiteDescriptor {
    SiteDescriptor {
        name,
        url,
        region: Some(region),
    }
}

static SITES: &[SiteDescriptor] = &[
    site("Bedfordshire, Luton and Milton Keynes", "https://bedfordshirelutonandmiltonkeynes.icb.nhs.uk", "East of England"),
    site("Cambridgeshire & Peterborough", "https://www.cpics.org.uk", "East of England"),
    site("Hertfordshire and West Essex", "https://hertsandwestessex.ics.nhs.uk", "East of England"),
    site("Mid and South Essex", "https://www.midandsouthessex.ics.nhs.uk", "East of England"),
    site("Norfolk and Waveney", "https://improvinglivesnw.org.uk", "East of England"),
    site("Suffolk and North East Essex", "https://suffolkandnortheastessex.icb.nhs.uk", "East of England"),
    site("North Central London", "https://nclhealthandcare.org.uk", "London"),
    site("North East London", "https://northeastlondon.icb.nhs.uk", "London"),
    site("North West London", "https://www.nwlondonics.nhs.uk", "London"),
    site("South East London", "https://www.selondonics.org", "London"),
    site("South West London", "https://www.southwestlondon.icb.nhs.uk", "London"),
    site("Birmingham and Solihull", "https://www.birminghamsolihull.icb.nhs.uk", "Midlands"),
    site("Black Country", "https://blackcountry.icb.nhs.uk", "Midlands"),
    site("Coventry and Warwickshire", "https://www.happyhealthylives.uk", "Midlands"),
    site("Derby and Derbyshire", "https://joinedupcarederbyshire.co.uk", "Midlands"),
    site("Herefordshire and Worcestershire", "https://herefordshireandworcestershire.icb.nhs.uk", "Midlands"),
    site("Leicester, Leicestershire and Rutland", "https://leicesterleicestershireandrutland.icb.nhs.uk", "Midlands"),
    site("Lincolnshire", "https://www.lincolnshire.icb.nhs.uk", "Midlands"),
    site("Northamptonshire", "https://www.icnorthamptonshire.org.uk", "Midlands"),
    site("Nottingham and Nottinghamshire", "https://www.notts.icb.nhs.uk", "Midlands"),
    site("Shropshire, Telford and Wrekin", "https://www.shropshiretelfordandwrekin.nhs.uk", "Midlands"),
    site("Staffordshire and Stoke-on-Trent", "https://staffsstoke.icb.nhs.uk", "Midlands"),
    site("Humber and North Yorkshire", "https://www.humberandnorthyorkshire.icb.nhs.uk", "North East and Yorkshire"),
    site("North East and North Cumbria", "https://northeastnorthcumbria.nhs.uk", "North East and Yorkshire"),
    site("South Yorkshire", "https://www.southyorkshire.icb.nhs.uk", "North East and Yorkshire"),
    site("West Yorkshire", "https://www.westyorkshire.icb.nhs.uk", "North East and Yorkshire"),
    site("Cheshire and Merseyside", "https://www.cheshireandmerseyside.nhs.uk", "North West"),
    site("Greater Manchester", "https://www.gmintegratedcare.org.uk", "North West"),
    site("Lancashire and South Cumbria", "https://www.lancashireandsouthcumbria.icb.nhs.uk", "North West"),
    site("Buckinghamshire, Oxfordshire and Berkshire West", "https://www.bucksoxonberksw.icb.nhs.uk", "South East"),
    site("Frimley", "https://www.frimley.icb.nhs.uk", "South East"),
    site("Hampshire and Isle of Wight", "https://www.hantsiowhealthandcare.org.uk", "South East"),
    site("Kent and Medway", "https://www.kentandmedway.icb.nhs.uk", "South East"),
    site("Surrey Heartlands", "https://www.surreyheartlands.org", "South East"),
    site("Sussex", "https://www.sussex.icb.nhs.uk", "South East"),
    site("Bath and North East Somerset, Swindon and Wiltshire", "https://bsw.icb.nhs.uk", "South West"),
    site("Bristol, North Somerset and South Gloucestershire", "https://bnssg.icb.nhs.uk", "South West"),
    site("Cornwall and the Isles of Scilly", "https://cios.icb.nhs.uk", "South West"),
    site("Devon", "https://onedevon.org.uk", "South West"),
    site("Dorset", "https://www.nhsdorset.nhs.uk", "South West"),
    site("Gloucestershire", "https://www.nhsglos.nhs.uk", "South West"),
    site("Somerset", "https://www.nhssomerset.nhs.uk", "South West"),
];

pub fn site_directory() -> &'static [SiteDescriptor] {
    SITES
}

pub fn site_by_url(url: &str) -> Option<&'static SiteDescriptor> {
    SITES.iter().find(|site| site.url == url)
}

/// Sites grouped by region name. Sites without a region are left out.
pub fn sites_by_region() -> BTreeMap<&'static str, Vec<&'static SiteDescriptor>> {
    let mut grouped: BTreeMap<&'static str, Vec<&'static SiteDescriptor>> = BTreeMap::new();
    for site in SITES {
        if let Some(region) = site.region {
            grouped.entry(region).or_default().push(site);
        }
    }
    grouped
}

/// True when any requested site identifier resolves to a directory entry
/// that covers `result`. Unknown identifiers match nothing.
pub fn matches_any_site(result: &SearchResult, requested: &[String]) -> bool {
    requested
        .iter()
        .filter_map(|url| site_by_url(url))
        .any(|site| site.covers(result))
}
