use crate::{Match, SearchResult};

fn document(
    title: &str,
    url: &str,
    date: &str,
    source: &str,
    file_size: &str,
    matches: Vec<Match>,
) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        url: url.to_string(),
        date: date.to_string(),
        source: source.to_string(),
        file_size: file_size.to_string(),
        matches,
    }
}

pub fn pathology_results() -> Vec<SearchResult> {
    vec![
        document(
            "NHS North West London ICB Board Meeting Minutes",
            "https://example.com/nhs-nwl-minutes-may-2023.pdf",
            "2023-05-15",
            "NHS North West London",
            "2.4 MB",
            vec![
                Match::new(
                    12,
                    "The committee discussed the ongoing challenges in ",
                    "pathology services",
                    " across the region, with specific concerns about laboratory turnaround times.",
                ),
                Match::new(
                    14,
                    "Dr. Thompson presented the quarterly ",
                    "pathology network",
                    " report, highlighting improvements in blood sciences integration.",
                ),
                Match::new(
                    27,
                    "The budget allocation for ",
                    "pathology modernization",
                    " was approved, with £3.2m designated for equipment upgrades.",
                ),
            ],
        ),
        document(
            "NHS South East ICB Quality Committee Report",
            "https://example.com/nhs-se-quality-report-2023.pdf",
            "2023-07-22",
            "NHS South East England",
            "1.8 MB",
            vec![
                Match::new(
                    5,
                    "The digital ",
                    "pathology implementation",
                    " timeline was reviewed, with expected completion in Q4 2023/24.",
                ),
                Match::new(
                    8,
                    "Concerns were raised about staffing levels in ",
                    "pathology departments",
                    ", particularly in histopathology where vacancy rates remain high.",
                ),
            ],
        ),
        document(
            "NHS Midlands Partnership Strategic Planning Document",
            "https://example.com/nhs-midlands-strategic-plan.pdf",
            "2023-03-10",
            "NHS Midlands",
            "4.2 MB",
            vec![Match::new(
                42,
                "The consolidation of ",
                "pathology services",
                " into regional hubs continues to deliver efficiency savings while maintaining quality standards.",
            )],
        ),
    ]
}

pub fn climate_results() -> Vec<SearchResult> {
    vec![
        document(
            "Climate Change Impact Assessment 2023",
            "https://example.com/climate-impact-2023.pdf",
            "2023-09-05",
            "Environmental Protection Agency",
            "5.7 MB",
            vec![
                Match::new(
                    8,
                    "Rising sea levels pose a significant threat to coastal communities, with projections indicating a ",
                    "0.5m rise by 2050",
                    " in worst-case scenarios.",
                ),
                Match::new(
                    12,
                    "Extreme weather events have increased by ",
                    "37% in the last decade",
                    ", resulting in economic damages exceeding $1.2 trillion globally.",
                ),
            ],
        ),
        document(
            "Environmental Policy Framework 2023-2028",
            "https://example.com/env-policy-framework.pdf",
            "2023-02-18",
            "Department of Environment",
            "3.2 MB",
            vec![Match::new(
                24,
                "Carbon neutrality targets will be implemented across all government sectors by ",
                "2035",
                ", five years ahead of the previous timeline.",
            )],
        ),
    ]
}

pub fn finance_results() -> Vec<SearchResult> {
    vec![
        document(
            "Annual Financial Report FY2022-23",
            "https://example.com/annual-finance-2022-23.pdf",
            "2023-04-30",
            "Ministry of Finance",
            "8.3 MB",
            vec![
                Match::new(
                    15,
                    "The fiscal deficit stands at ",
                    "3.8% of GDP",
                    ", a decrease of 0.6 percentage points from the previous financial year.",
                ),
                Match::new(
                    42,
                    "Public debt is projected to reach ",
                    "67.2% of GDP",
                    " by the end of FY2023-24, raising concerns about long-term fiscal sustainability.",
                ),
            ],
        ),
        document(
            "Budget Allocation Report 2023",
            "https://example.com/budget-allocation-2023.pdf",
            "2023-01-15",
            "Budget Office",
            "6.1 MB",
            vec![Match::new(
                7,
                "Education spending increased by ",
                "12.5% year-on-year",
                ", representing the largest percentage increase across all sectors.",
            )],
        ),
    ]
}

pub fn general_results() -> Vec<SearchResult> {
    vec![
        document(
            "Research on Artificial Intelligence in Healthcare",
            "https://example.com/ai-healthcare-research.pdf",
            "2023-08-12",
            "National Institute of Health",
            "4.5 MB",
            vec![Match::new(
                18,
                "AI-powered diagnostic tools demonstrated an accuracy rate of ",
                "94.3%",
                " in detecting early-stage lung cancer, outperforming traditional methods.",
            )],
        ),
        document(
            "Digital Transformation Strategy 2023-2025",
            "https://example.com/digital-transformation.pdf",
            "2023-06-20",
            "Department of Digital Innovation",
            "3.7 MB",
            vec![Match::new(
                5,
                "Cloud adoption across government services is expected to reach ",
                "75% by 2024",
                ", resulting in projected savings of $150M annually.",
            )],
        ),
        document(
            "Public Health Strategy 2023",
            "https://example.com/public-health-2023.pdf",
            "2023-03-28",
            "Department of Health",
            "5.2 MB",
            vec![Match::new(
                23,
                "Mental health services will receive a ",
                "30% increase in funding",
                " over the next three years, addressing the growing demand for support services.",
            )],
        ),
    ]
}
