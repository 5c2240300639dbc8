// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sample link generation for manual testing — debug builds only.
//
// Links are built entirely offline from fixed pools; nothing here touches the
// network, so the generator can never fail.

use linksaver_core::types::{Browser, Link, today};
use rand::Rng;

const URLS: &[&str] = &[
    "https://www.google.com",
    "https://github.com/rust-lang/rust",
    "https://rust-random.github.io/book/guide-start.html",
    "https://opensource.guide/getting-paid/",
    "https://opensource.guide/best-practices/",
    "https://opensource.guide/leadership-and-governance/",
    "https://www.freecodecamp.org/news/ultimate-owners-guide-to-open-source/",
    "https://plausible.io/blog/open-source-funding",
    "https://itsfoss.com/open-source-funding-platforms/",
    "https://www.svgrepo.com/",
    "https://www.youtube.com/results?search_query=git+branching+strategy",
    "https://nextjs.org/learn/foundations/about-nextjs",
];

const TAGS: &[&str] = &[
    "Google",
    "Website",
    "Tutorial",
    "Github",
    "Youtube",
    "Video",
    "RandomLink",
    "Code",
    "Coding",
    "Programming",
    "Short",
];

/// Generate `count` random links for populating a fresh install.
pub fn sample_links(count: usize) -> Vec<Link> {
    let mut rng = rand::rng();
    let mut links = Vec::with_capacity(count);

    for _ in 0..count {
        let url = URLS[rng.random_range(0..URLS.len())];

        let tag_count = rng.random_range(1..TAGS.len());
        let mut tags = Vec::with_capacity(tag_count);
        for _ in 0..tag_count {
            tags.push(TAGS[rng.random_range(0..TAGS.len())].to_string());
        }

        let browsers = Browser::all();
        let browser = browsers[rng.random_range(0..browsers.len())];
        let priority = char::from(b'A' + rng.random_range(0..26u8));

        links.push(
            Link::new(url)
                .title(format!("Sample: {url}"))
                .description("Generated sample link")
                .tags_vec(tags)
                .browser(browser)
                .priority(priority)
                .date(today()),
        );
    }

    links
}
