use super::*;

#[test]
fn map_embed_url_encodes_spaces() {
    assert_eq!(
        map_embed_url(ADDRESS_STREET),
        "https://maps.google.com/maps?q=서울특별시%20강남구%20강남대로%20320&t=&z=15&ie=UTF8&iwloc=&output=embed"
    );
}

#[test]
fn map_embed_url_trims_outer_whitespace() {
    assert!(map_embed_url("  a b ").contains("q=a%20b&"));
}

#[test]
fn nav_links_cover_every_page_once() {
    let pages: Vec<Page> = NAV_LINKS.iter().map(|l| l.page).collect();
    assert_eq!(pages, Page::ALL.to_vec());
}

#[test]
fn footer_links_skip_home() {
    assert!(FOOTER_LINKS.iter().all(|l| l.page != Page::Home));
}

#[test]
fn service_area_ids_are_unique() {
    let mut ids: Vec<&str> = SERVICE_AREAS.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SERVICE_AREAS.len());
}

#[test]
fn copyright_includes_year_and_office() {
    assert_eq!(copyright(2026), "© 2026 기업 노동·산업안전 전문 행정사사무소. All rights reserved.");
}
