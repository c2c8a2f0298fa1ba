#![forbid(unsafe_code)]

//! Prop-map parsing and host prop forwarding.
//!
//! Dynamic hosts hand the sheet a flat, string-keyed [`PropMap`].
//! [`SheetConfig::from_props`] pulls out the keys the sheet understands and
//! returns the rest untouched, ready to forward to the host (native modal) or
//! the panel view (overlay host).
//!
//! Recognized keys: `position`, `animationDuration` (ms), `animateOnMount`,
//! `isNative`, `showOverlay`, `shouldCloseOnOverlayPress`,
//! `shouldAnimateOnOverlayPress`, `shouldAnimateOnRequestClose`,
//! `overlayStyle.opacity`, `screenHeight`. `visible` is intent, read with
//! [`visible_prop`], and is never forwarded.
//!
//! Style keys (`style`, `containerStyle`, `overlayStyle` and flattened
//! `overlayStyle.*`) are split into [`SheetStyles`] and reach the renderer's
//! panel, container and backdrop slots instead of the host. A native modal
//! host gets `animationType: "none"` and `transparent: true` unless the caller
//! set them.

use std::collections::BTreeMap;
use std::time::Duration;

use slidesheet_core::geometry::Edge;

use super::config::{SheetConfig, SheetConfigError};
use super::host::HostKind;

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Nested object, e.g. a style.
    Map(PropMap),
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<PropMap> for PropValue {
    fn from(v: PropMap) -> Self {
        Self::Map(v)
    }
}

/// Ordered prop map.
pub type PropMap = BTreeMap<String, PropValue>;

pub const VISIBLE: &str = "visible";
pub const POSITION: &str = "position";
pub const ANIMATION_DURATION: &str = "animationDuration";
pub const ANIMATE_ON_MOUNT: &str = "animateOnMount";
pub const IS_NATIVE: &str = "isNative";
pub const SHOW_OVERLAY: &str = "showOverlay";
pub const SHOULD_CLOSE_ON_OVERLAY_PRESS: &str = "shouldCloseOnOverlayPress";
pub const SHOULD_ANIMATE_ON_OVERLAY_PRESS: &str = "shouldAnimateOnOverlayPress";
pub const SHOULD_ANIMATE_ON_REQUEST_CLOSE: &str = "shouldAnimateOnRequestClose";
pub const OVERLAY_OPACITY: &str = "overlayStyle.opacity";
pub const SCREEN_HEIGHT: &str = "screenHeight";

pub const STYLE: &str = "style";
pub const CONTAINER_STYLE: &str = "containerStyle";
pub const OVERLAY_STYLE: &str = "overlayStyle";
const OVERLAY_STYLE_PREFIX: &str = "overlayStyle.";
const OPACITY: &str = "opacity";

pub const ANIMATION_TYPE: &str = "animationType";
pub const TRANSPARENT: &str = "transparent";

/// Keys consumed by the sheet and never forwarded.
pub const SHEET_KEYS: [&str; 11] = [
    VISIBLE,
    POSITION,
    ANIMATION_DURATION,
    ANIMATE_ON_MOUNT,
    IS_NATIVE,
    SHOW_OVERLAY,
    SHOULD_CLOSE_ON_OVERLAY_PRESS,
    SHOULD_ANIMATE_ON_OVERLAY_PRESS,
    SHOULD_ANIMATE_ON_REQUEST_CLOSE,
    OVERLAY_OPACITY,
    SCREEN_HEIGHT,
];

fn is_style_key(key: &str) -> bool {
    key == STYLE
        || key == CONTAINER_STYLE
        || key == OVERLAY_STYLE
        || key.starts_with(OVERLAY_STYLE_PREFIX)
}

/// Copy of `props` without the sheet's own keys and style keys.
pub fn filter_host_props(props: &PropMap) -> PropMap {
    props
        .iter()
        .filter(|(key, _)| !SHEET_KEYS.contains(&key.as_str()) && !is_style_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Styling applied by the sheet itself rather than the host.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetStyles {
    /// Outer container (`containerStyle`).
    pub container: PropMap,
    /// Content panel (`style`).
    pub panel: PropMap,
    /// Backdrop (`overlayStyle`), without `opacity`: the backdrop opacity is
    /// animated by the sheet.
    pub overlay: PropMap,
}

impl SheetStyles {
    /// Split the style keys out of `props`.
    ///
    /// `style`, `containerStyle` and `overlayStyle` must be maps. Flattened
    /// `overlayStyle.<name>` keys win over the same entry of a nested
    /// `overlayStyle` map.
    pub fn from_props(props: &PropMap) -> Result<Self, SheetConfigError> {
        let mut overlay = map_prop(props, OVERLAY_STYLE)?;
        overlay.remove(OPACITY);
        for (key, value) in props {
            if let Some(name) = key.strip_prefix(OVERLAY_STYLE_PREFIX)
                && name != OPACITY
            {
                overlay.insert(name.to_owned(), value.clone());
            }
        }
        Ok(Self {
            container: map_prop(props, CONTAINER_STYLE)?,
            panel: map_prop(props, STYLE)?,
            overlay,
        })
    }
}

/// Read the required `visible` prop.
pub fn visible_prop(props: &PropMap) -> Result<bool, SheetConfigError> {
    match props.get(VISIBLE) {
        Some(PropValue::Bool(v)) => Ok(*v),
        Some(_) => Err(invalid(VISIBLE, "bool")),
        None => Err(SheetConfigError::MissingProp { key: VISIBLE }),
    }
}

/// Forwarded props split between host and panel, plus the sheet's styles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForwardedProps {
    pub host: PropMap,
    pub panel: PropMap,
    pub styles: SheetStyles,
}

impl ForwardedProps {
    /// Native modals receive the props, with the modal defaults filled in;
    /// overlay hosts pass them to the panel.
    ///
    /// `props` must already be filtered with [`filter_host_props`].
    pub fn route(props: PropMap, styles: SheetStyles, host: HostKind) -> Self {
        match host {
            HostKind::NativeModal => {
                let mut host = props;
                host.entry(ANIMATION_TYPE.to_owned())
                    .or_insert_with(|| PropValue::from("none"));
                host.entry(TRANSPARENT.to_owned())
                    .or_insert(PropValue::Bool(true));
                Self {
                    host,
                    panel: PropMap::new(),
                    styles,
                }
            }
            HostKind::Overlay => Self {
                host: PropMap::new(),
                panel: props,
                styles,
            },
        }
    }

    /// Filter, split and route a full prop map.
    pub fn from_props(props: &PropMap, host: HostKind) -> Result<Self, SheetConfigError> {
        let styles = SheetStyles::from_props(props)?;
        Ok(Self::route(filter_host_props(props), styles, host))
    }
}

fn invalid(key: &str, expected: &'static str) -> SheetConfigError {
    SheetConfigError::InvalidProp {
        key: key.to_owned(),
        expected,
    }
}

fn bool_prop(props: &PropMap, key: &str) -> Result<Option<bool>, SheetConfigError> {
    match props.get(key) {
        Some(PropValue::Bool(v)) => Ok(Some(*v)),
        Some(_) => Err(invalid(key, "bool")),
        None => Ok(None),
    }
}

fn number_prop(props: &PropMap, key: &str) -> Result<Option<f64>, SheetConfigError> {
    match props.get(key) {
        Some(PropValue::Number(v)) => Ok(Some(*v)),
        Some(_) => Err(invalid(key, "number")),
        None => Ok(None),
    }
}

fn map_prop(props: &PropMap, key: &str) -> Result<PropMap, SheetConfigError> {
    match props.get(key) {
        Some(PropValue::Map(m)) => Ok(m.clone()),
        Some(_) => Err(invalid(key, "map")),
        None => Ok(PropMap::new()),
    }
}

/// `overlayStyle.opacity`, flattened or nested.
fn overlay_opacity(props: &PropMap) -> Result<Option<f64>, SheetConfigError> {
    if let Some(opacity) = number_prop(props, OVERLAY_OPACITY)? {
        return Ok(Some(opacity));
    }
    match props.get(OVERLAY_STYLE) {
        Some(PropValue::Map(style)) => {
            number_prop(style, OPACITY).map_err(|_| invalid(OVERLAY_OPACITY, "number"))
        }
        _ => Ok(None),
    }
}

impl SheetConfig {
    /// Parse recognized props on top of the defaults.
    ///
    /// Returns the validated config and the props left for forwarding.
    pub fn from_props(props: &PropMap) -> Result<(Self, PropMap), SheetConfigError> {
        let mut config = Self::default();

        match props.get(POSITION) {
            Some(PropValue::Text(name)) => config.position = name.parse::<Edge>()?,
            Some(_) => return Err(invalid(POSITION, "string")),
            None => {}
        }
        if let Some(millis) = number_prop(props, ANIMATION_DURATION)? {
            if !(millis.is_finite() && millis >= 0.0) {
                return Err(SheetConfigError::InvalidDuration { millis });
            }
            config.animation_duration = Duration::from_nanos((millis * 1_000_000.0).round() as u64);
        }
        if let Some(v) = bool_prop(props, ANIMATE_ON_MOUNT)? {
            config.policy.animate_on_mount = v;
        }
        if let Some(v) = bool_prop(props, SHOULD_ANIMATE_ON_OVERLAY_PRESS)? {
            config.policy.should_animate_on_overlay_press = v;
        }
        if let Some(v) = bool_prop(props, SHOULD_ANIMATE_ON_REQUEST_CLOSE)? {
            config.policy.should_animate_on_request_close = v;
        }
        if let Some(v) = bool_prop(props, IS_NATIVE)? {
            config.is_native = v;
        }
        if let Some(v) = bool_prop(props, SHOW_OVERLAY)? {
            config.show_overlay = v;
        }
        if let Some(v) = bool_prop(props, SHOULD_CLOSE_ON_OVERLAY_PRESS)? {
            config.should_close_on_overlay_press = v;
        }
        config.overlay_style.opacity = overlay_opacity(props)?;
        config.screen_height = number_prop(props, SCREEN_HEIGHT)?;
        SheetStyles::from_props(props)?;

        config.validate()?;
        Ok((config, filter_host_props(props)))
    }
}
