use crate::statements::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every statement kind the generator can append to a program.
///
/// A `Statement` renders through `Display` as exactly the text that lands
/// in the `.src` file, line terminators included. The emitted token layout
/// is a compatibility surface for the KUKA controller and must not change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "Statement")]
pub enum Statement {
    #[serde(rename = "LIN")]
    LinMotion(LinMotion),

    #[serde(rename = "PTP")]
    PtpMotion(PtpMotion),

    #[serde(rename = "PTP_Joint")]
    JointMotion(JointMotion),

    #[serde(rename = "SLIN")]
    SlinMotion(SlinMotion),

    #[serde(rename = "SPTP")]
    SptpMotion(SptpMotion),

    #[serde(rename = "SPLINE")]
    SplineBlock(SplineBlock),

    #[serde(rename = "Home")]
    HomeMotion(HomeMotion),

    #[serde(rename = "SetBaseFrame")]
    SetBaseFrame(SetBaseFrame),

    #[serde(rename = "SetToolFrame")]
    SetToolFrame(SetToolFrame),

    #[serde(rename = "SelectBase")]
    SelectBase(SelectBase),

    #[serde(rename = "SelectTool")]
    SelectTool(SelectTool),

    #[serde(rename = "PreMilling")]
    PreMilling(PreMilling),

    #[serde(rename = "Delay")]
    Delay(Delay),

    #[serde(rename = "SetDigitalOut")]
    SetDigitalOut(SetDigitalOut),

    #[serde(rename = "SetAnalogOut")]
    SetAnalogOut(SetAnalogOut),

    #[serde(rename = "SetLinSpeed")]
    SetLinSpeed(SetLinSpeed),

    #[serde(rename = "SetJointSpeed")]
    SetJointSpeed(SetJointSpeed),

    #[serde(rename = "SetLinSmoothing")]
    SetLinSmoothing(SetLinSmoothing),

    #[serde(rename = "SetJointSmoothing")]
    SetJointSmoothing(SetJointSmoothing),

    #[serde(rename = "SetParameter")]
    SetParameter(SetParameter),

    #[serde(rename = "Raw")]
    RawKrl(RawKrl),
}

impl Statement {
    /// The leading KRL token of the rendered statement, for logging.
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::LinMotion(_) => "LIN",
            Statement::PtpMotion(_) => "PTP",
            Statement::JointMotion(_) => "PTP",
            Statement::SlinMotion(_) => "SLIN",
            Statement::SptpMotion(_) => "SPTP",
            Statement::SplineBlock(_) => "SPLINE",
            Statement::HomeMotion(_) => "PTP",
            Statement::SetBaseFrame(_) => "$BASE",
            Statement::SetToolFrame(_) => "$TOOL",
            Statement::SelectBase(_) => "BAS",
            Statement::SelectTool(_) => "BAS",
            Statement::PreMilling(_) => "Vorfraesen",
            Statement::Delay(_) => "WAIT SEC",
            Statement::SetDigitalOut(_) => "$OUT",
            Statement::SetAnalogOut(_) => "$ANOUT",
            Statement::SetLinSpeed(_) => "BAS",
            Statement::SetJointSpeed(_) => "BAS",
            Statement::SetLinSmoothing(_) => "$APO.CDIS",
            Statement::SetJointSmoothing(_) => "$APO_DIS_PTP",
            Statement::SetParameter(_) => "BAS",
            Statement::RawKrl(_) => "<raw>",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::LinMotion(s) => s.fmt(f),
            Statement::PtpMotion(s) => s.fmt(f),
            Statement::JointMotion(s) => s.fmt(f),
            Statement::SlinMotion(s) => s.fmt(f),
            Statement::SptpMotion(s) => s.fmt(f),
            Statement::SplineBlock(s) => s.fmt(f),
            Statement::HomeMotion(s) => s.fmt(f),
            Statement::SetBaseFrame(s) => s.fmt(f),
            Statement::SetToolFrame(s) => s.fmt(f),
            Statement::SelectBase(s) => s.fmt(f),
            Statement::SelectTool(s) => s.fmt(f),
            Statement::PreMilling(s) => s.fmt(f),
            Statement::Delay(s) => s.fmt(f),
            Statement::SetDigitalOut(s) => s.fmt(f),
            Statement::SetAnalogOut(s) => s.fmt(f),
            Statement::SetLinSpeed(s) => s.fmt(f),
            Statement::SetJointSpeed(s) => s.fmt(f),
            Statement::SetLinSmoothing(s) => s.fmt(f),
            Statement::SetJointSmoothing(s) => s.fmt(f),
            Statement::SetParameter(s) => s.fmt(f),
            Statement::RawKrl(s) => s.fmt(f),
        }
    }
}
