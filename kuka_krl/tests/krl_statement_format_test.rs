/// Exact-text validation of every statement template. The rendered token
/// layout is the compatibility surface for the KUKA controller, so these
/// assert full strings, not fragments.
use kuka_krl::statements::*;
use kuka_krl::{CartesianPoint, Frame, JointPoint, Smoothing};

#[test]
fn lin_motion_renders_all_ten_fields_with_c_dis() {
    let stmt = LinMotion::new(CartesianPoint {
        x: 100.0,
        y: 0.0,
        z: 50.0,
        ..CartesianPoint::default()
    });
    assert_eq!(
        stmt.to_string(),
        "LIN {X 100, Y 0, Z 50, A 0, B 0, C 0, E1 0, E2 0, E3 0, E4 0} C_DIS\n"
    );
}

#[test]
fn ptp_motion_selects_smoothing_token() {
    let p = CartesianPoint::default();
    let blended = PtpMotion::new(p, Smoothing::CDis);
    let exact = PtpMotion::new(p, Smoothing::CPtp);
    assert!(blended.to_string().ends_with("} C_DIS\n"));
    assert!(exact.to_string().ends_with("} C_PTP\n"));
}

#[test]
fn joint_motion_renders_joint_fields_with_c_ptp() {
    let stmt = JointMotion::new(JointPoint {
        a1: 10.0,
        a2: -90.0,
        a5: 45.5,
        e1: 250.0,
        ..JointPoint::default()
    });
    assert_eq!(
        stmt.to_string(),
        "PTP {A1 10, A2 -90, A3 0, A4 0, A5 45.5, A6 0, E1 250, E2 0, E3 0, E4 0} C_PTP\n"
    );
}

#[test]
fn slin_and_sptp_use_spline_keywords() {
    let p = CartesianPoint {
        x: 1.0,
        ..CartesianPoint::default()
    };
    assert_eq!(
        SlinMotion::new(p).to_string(),
        "SLIN {X 1, Y 0, Z 0, A 0, B 0, C 0, E1 0, E2 0, E3 0, E4 0} C_DIS\n"
    );
    assert_eq!(
        SptpMotion::new(p, Smoothing::CPtp).to_string(),
        "SPTP {X 1, Y 0, Z 0, A 0, B 0, C 0, E1 0, E2 0, E3 0, E4 0} C_PTP\n"
    );
}

#[test]
fn spline_block_frames_indented_segments() {
    let points = vec![
        CartesianPoint {
            x: 1.0,
            ..CartesianPoint::default()
        },
        CartesianPoint {
            x: 2.0,
            ..CartesianPoint::default()
        },
        CartesianPoint {
            x: 3.0,
            ..CartesianPoint::default()
        },
    ];
    let rendered = SplineBlock::new(points).to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "SPLINE");
    assert_eq!(lines[4], "ENDSPLINE");
    for (i, line) in lines[1..4].iter().enumerate() {
        assert!(line.starts_with("   {X "), "segment {} not indented", i + 1);
        assert!(line.ends_with("} C_DIS"));
    }
    assert_eq!(
        lines[2],
        "   {X 2, Y 0, Z 0, A 0, B 0, C 0, E1 0, E2 0, E3 0, E4 0} C_DIS"
    );
}

#[test]
fn home_motion_has_no_smoothing_token_and_closes_fold() {
    let stmt = HomeMotion::new(JointPoint {
        a2: -90.0,
        a3: 90.0,
        a5: 90.0,
        ..JointPoint::default()
    });
    assert_eq!(
        stmt.to_string(),
        "PTP {A1 0, A2 -90, A3 90, A4 0, A5 90, A6 0, E1 0, E2 0, E3 0, E4 0}\n;ENDFOLD\n\n"
    );
}

#[test]
fn frame_assignments_render_frame_aggregate() {
    let frame = Frame {
        x: 10.0,
        y: 20.0,
        z: 30.0,
        a: 0.5,
        ..Frame::default()
    };
    assert_eq!(
        SetBaseFrame::new(frame).to_string(),
        "$BASE = {FRAME: X 10, Y 20, Z 30, A 0.5, B 0, C 0}\n"
    );
    assert_eq!(
        SetToolFrame::new(frame).to_string(),
        "$TOOL = {FRAME: X 10, Y 20, Z 30, A 0.5, B 0, C 0}\n"
    );
}

#[test]
fn frame_selection_by_number() {
    assert_eq!(SelectBase::new(2).to_string(), "BAS(#BASE, 2)\n");
    assert_eq!(SelectTool::new(7).to_string(), "BAS(#TOOL, 7)\n");
}

#[test]
fn pre_milling_invokes_vorfraesen() {
    assert_eq!(PreMilling::new().to_string(), "Vorfraesen()\n");
}

#[test]
fn delay_renders_wait_sec() {
    assert_eq!(Delay::new(1.5).to_string(), "WAIT SEC 1.5\n");
    assert_eq!(Delay::new(0.0).to_string(), "WAIT SEC 0\n");
}

#[test]
fn output_assignments() {
    assert_eq!(SetDigitalOut::new(3, true).to_string(), "$OUT[3] = TRUE\n");
    assert_eq!(
        SetDigitalOut::new(3, false).to_string(),
        "$OUT[3] = FALSE\n"
    );
    assert_eq!(
        SetAnalogOut::new(1, 0.75).to_string(),
        "$ANOUT[1] = 0.75\n"
    );
}

#[test]
fn speed_settings_go_through_bas() {
    assert_eq!(SetLinSpeed::new(0.25).to_string(), "BAS(#VEL_CP, 0.25)\n");
    assert_eq!(SetJointSpeed::new(30.0).to_string(), "BAS(#VEL_PTP, 30)\n");
}

#[test]
fn lin_smoothing_sets_apo_cdis() {
    assert_eq!(SetLinSmoothing::new(2.0).to_string(), "$APO.CDIS = 2\n");
}

#[test]
fn joint_smoothing_writes_one_terminated_line_per_entry() {
    let stmt = SetJointSmoothing::new(vec![1.0, 2.5, 0.0]);
    assert_eq!(
        stmt.to_string(),
        "$APO_DIS_PTP[1] = 1\n$APO_DIS_PTP[2] = 2.5\n$APO_DIS_PTP[3] = 0\n"
    );
}

#[test]
fn joint_smoothing_zeroed_default_is_twelve_entries() {
    let rendered = SetJointSmoothing::zeroed().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "$APO_DIS_PTP[1] = 0");
    assert_eq!(lines[11], "$APO_DIS_PTP[12] = 0");
}

#[test]
fn set_parameter_renders_generic_bas_call() {
    assert_eq!(
        SetParameter::new("#ACC_PTP", 20.0).to_string(),
        "BAS(#ACC_PTP, 20)\n"
    );
}

#[test]
fn raw_krl_is_verbatim_without_terminator() {
    assert_eq!(RawKrl::new("HALT").to_string(), "HALT");
    assert_eq!(RawKrl::new(";comment\n").to_string(), ";comment\n");
}
