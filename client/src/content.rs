//! Static site content: office details, image URLs, and page copy.
//!
//! Page components render these tables directly. Nothing here is stateful.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::nav::Page;

pub const OFFICE_NAME: &str = "기업 노동·산업안전 전문 행정사사무소";
pub const BRAND: &str = "기업 노동·산업안전 전문";
pub const TAGLINE: &str = "기업의 안전과 근로자의 권리, 28년 경력의 전문가가 지킵니다.";
pub const PHONE: &str = "010-7128-8192";
pub const ADDRESS_STREET: &str = "서울특별시 강남구 강남대로 320";
pub const ADDRESS_SUITE: &str = "1202호 (황화빌딩)";
pub const BUSINESS_HOURS: &str = "평일 09:00 ~ 18:00 (주말/공휴일 휴무)";

/// Externally hosted imagery.
pub mod assets {
    pub const HERO_BG: &str = "https://loremflickr.com/1600/900/office,business";
    pub const TRUST_ICON_1: &str = "https://loremflickr.com/100/100/badge,certification";
    pub const TRUST_ICON_2: &str = "https://loremflickr.com/100/100/government,building";
    pub const PROFILE_IMG: &str = "https://loremflickr.com/800/800/man,suit,asian,professional";
    pub const SERVICE_LABOR: &str = "https://loremflickr.com/600/400/meeting,contract";
    pub const SERVICE_SAFETY: &str = "https://loremflickr.com/600/400/construction,helmet,safety";
    pub const SERVICE_COMPENSATION: &str = "https://loremflickr.com/600/400/hospital,doctor,paperwork";
    pub const SERVICE_FOREIGNER: &str = "https://loremflickr.com/600/400/passport,visa,airport";
}

// =============================================================================
// NAVIGATION
// =============================================================================

pub struct NavLink {
    pub label: &'static str,
    pub page: Page,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "홈", page: Page::Home },
    NavLink { label: "행정사 소개", page: Page::Profile },
    NavLink { label: "업무 분야", page: Page::Services },
    NavLink { label: "문의하기", page: Page::Contact },
];

pub const HEADER_CTA: &str = "무료 상담 신청";
pub const MOBILE_CTA: &str = "상담 신청하기";

/// Footer quick links. The contact entry doubles as directions.
pub const FOOTER_LINKS: [NavLink; 3] = [
    NavLink { label: "행정사 소개", page: Page::Profile },
    NavLink { label: "업무 분야", page: Page::Services },
    NavLink { label: "오시는 길", page: Page::Contact },
];

// =============================================================================
// HOME
// =============================================================================

pub struct ServicePreview {
    pub title: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
}

pub const SERVICE_PREVIEWS: [ServicePreview; 4] = [
    ServicePreview { title: "기업 노동 자문", icon: "file-text", summary: "근로계약서, 취업규칙, 임금 설계 및 노무 관리." },
    ServicePreview { title: "산업재해 보상", icon: "shield-check", summary: "업무상 재해 인정, 심사 청구 및 권리 구제." },
    ServicePreview { title: "산업안전 컨설팅", icon: "hard-hat", summary: "중대재해처벌법 대응, 위험성 평가, 안전 체계." },
    ServicePreview { title: "외국인 근로자", icon: "map-pin", summary: "E-7, E-9 비자 및 고용 허가 행정 대행." },
];

pub const TRUST_BADGES: [(&str, &str); 2] = [
    (assets::TRUST_ICON_1, "28년 공직 경력"),
    (assets::TRUST_ICON_2, "노동부·공단 출신"),
];

pub const WHY_US: [&str; 3] = [
    "실무에 강한 현장 중심 솔루션",
    "사전 리스크 차단을 위한 예방 컨설팅",
    "기업 규모에 맞춘 합리적인 자문 비용",
];

// =============================================================================
// PROFILE
// =============================================================================

pub const QUALIFICATIONS: [&str; 3] = [
    "일반행정사 (행정안전부)",
    "산업안전관리자 교육 수료",
    "인사노무관리 전문가 과정 수료",
];

pub struct CareerEntry {
    pub title: &'static str,
    pub detail: Option<&'static str>,
    pub current: bool,
}

pub const CAREER: [CareerEntry; 4] = [
    CareerEntry { title: "현) 기업 노동·산업안전 전문 행정사사무소 대표", detail: None, current: true },
    CareerEntry { title: "현) CnG교육코칭센터 전문 강사", detail: Some("기업체 노동법 및 산업안전 강의 출강"), current: true },
    CareerEntry { title: "전) 고용노동부 근무", detail: Some("근로감독, 산업안전 감독 실무"), current: false },
    CareerEntry { title: "전) 근로복지공단 근무", detail: Some("산재 보상, 고용 산재 보험 심사 실무"), current: false },
];

// =============================================================================
// SERVICES
// =============================================================================

pub struct ServiceArea {
    pub id: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub items: [&'static str; 4],
}

pub const SERVICE_AREAS: [ServiceArea; 4] = [
    ServiceArea {
        id: "labor",
        title: "기업 노동 자문",
        image: assets::SERVICE_LABOR,
        items: [
            "근로계약서, 취업규칙, 노사협의회 규정 작성 및 정비",
            "임금 설계 및 최저임금 위반 여부 검토",
            "해고, 징계 등 인사 처분 관련 법적 대응",
            "부당해고 및 부당노동행위 구제 신청 대리",
        ],
    },
    ServiceArea {
        id: "safety",
        title: "산업안전 (중대재해)",
        image: assets::SERVICE_SAFETY,
        items: [
            "중대재해처벌법 대응 안전보건관리체계 구축 컨설팅",
            "정기 위험성 평가 실시 및 지도",
            "산업안전보건법 위반 시정 조치 및 대응",
            "안전 교육 및 현장 점검 지원",
        ],
    },
    ServiceArea {
        id: "compensation",
        title: "산재 보상",
        image: assets::SERVICE_COMPENSATION,
        items: [
            "업무상 재해(부상, 질병) 요양 급여 신청",
            "과로사, 뇌심혈관계 질환, 근골격계 질환 입증",
            "장해 급여, 유족 급여 청구",
            "공단 불승인 처분에 대한 심사 및 재심사 청구",
        ],
    },
    ServiceArea {
        id: "foreigner",
        title: "외국인 근로자",
        image: assets::SERVICE_FOREIGNER,
        items: [
            "E-7(특정활동), E-9(비전문취업) 비자 관련 행정 업무",
            "외국인 고용 허가 신청 대행 및 인력 관리 자문",
            "체류 자격 변경 및 연장 신청",
            "불법 체류 및 출입국 사범 심사 대응",
        ],
    },
];

// =============================================================================
// CONTACT
// =============================================================================

/// Embedded map URL for the office address. Spaces become `%20`; the map
/// service accepts the remaining characters unescaped.
#[must_use]
pub fn map_embed_url(address: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}&t=&z=15&ie=UTF8&iwloc=&output=embed",
        address.trim().replace(' ', "%20")
    )
}

/// Copyright line for the footer.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} {OFFICE_NAME}. All rights reserved.")
}
