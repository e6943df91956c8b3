//! Alarm transition rules.
//!
//! Each rule maps the current [`AlarmStatus`] plus one triggering event to the
//! status that must be written next, or `None` when the event leaves the alarm
//! untouched. The [`SecurityService`](crate::SecurityService) decides which rule
//! applies and performs the writes.

use crate::status::AlarmStatus;
use crate::status::ArmingStatus;

/// A sensor tripped while the panel was armed.
pub fn escalate(current: AlarmStatus) -> Option<AlarmStatus> {
    match current {
        AlarmStatus::NoAlarm => Some(AlarmStatus::PendingAlarm),
        AlarmStatus::PendingAlarm => Some(AlarmStatus::Alarm),
        AlarmStatus::Alarm => None,
    }
}

/// A previously active sensor went quiet.
///
/// `Alarm -> PendingAlarm` stays defined even though the service never reaches
/// it through sensor changes, which are ignored while the alarm is sounding.
pub fn reduce(current: AlarmStatus) -> Option<AlarmStatus> {
    match current {
        AlarmStatus::PendingAlarm => Some(AlarmStatus::NoAlarm),
        AlarmStatus::Alarm => Some(AlarmStatus::PendingAlarm),
        AlarmStatus::NoAlarm => None,
    }
}

/// Status forced by a fresh classifier verdict. Always writes a status.
pub fn alarm_for_cat(cat_present: bool, arming: ArmingStatus) -> AlarmStatus {
    if cat_present && arming == ArmingStatus::ArmedHome {
        AlarmStatus::Alarm
    } else {
        AlarmStatus::NoAlarm
    }
}

/// Status forced by an arming change, given the cached cat verdict.
pub fn alarm_for_arming(arming: ArmingStatus, cat_present: bool) -> Option<AlarmStatus> {
    match arming {
        ArmingStatus::Disarmed => Some(AlarmStatus::NoAlarm),
        ArmingStatus::ArmedHome if cat_present => Some(AlarmStatus::Alarm),
        ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => None,
    }
}
