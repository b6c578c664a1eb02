use std::time::Duration;

use super::*;
use crate::config::{NotifyTimeouts, TelegramConfig};

fn base_config() -> SiteConfig {
    SiteConfig {
        port: 3000,
        telegram: None,
        recipient: inquiry::DEFAULT_RECIPIENT.to_owned(),
        simulated_delay: Duration::ZERO,
        timeouts: NotifyTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

#[test]
fn unconfigured_selects_log_notifier() {
    let notifier = from_config(&base_config()).unwrap();
    assert_eq!(notifier.kind(), "log");
}

#[test]
fn configured_selects_telegram_notifier() {
    let config = SiteConfig {
        telegram: Some(TelegramConfig {
            bot_token: "123:abc".to_owned(),
            chat_id: "-1".to_owned(),
            api_base: "https://api.telegram.org".to_owned(),
        }),
        ..base_config()
    };
    let notifier = from_config(&config).unwrap();
    assert_eq!(notifier.kind(), "telegram");
}
