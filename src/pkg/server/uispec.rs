use askama::Template;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

#[derive(Template)]
#[template(path = "index.html")]
pub struct Home {
    pub jobs: Vec<JobEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, title: &str) -> JobEntry {
        JobEntry {
            id,
            title: title.into(),
            description: format!("details for {}", title),
            price_pi: id as f64 * 1.5,
        }
    }

    #[test]
    fn test_empty_listing_renders() {
        let html = Home { jobs: vec![] }.render().expect("render");
        assert!(html.contains("No jobs posted yet"));
    }

    #[test]
    fn test_renders_every_job_in_given_order() {
        let jobs: Vec<JobEntry> = (1..=25).rev().map(|i| entry(i, &format!("posting-{:02}", i))).collect();
        let html = Home { jobs }.render().expect("render");
        let positions: Vec<usize> = (1..=25)
            .rev()
            .map(|i| html.find(&format!("posting-{:02}", i)).expect("every job rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("37.50"));
    }

    #[test]
    fn test_escapes_job_fields() {
        let html = Home {
            jobs: vec![JobEntry {
                id: 1,
                title: "<script>alert(1)</script>".into(),
                description: "a & b".into(),
                price_pi: 0.0,
            }],
        }
        .render()
        .expect("render");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
