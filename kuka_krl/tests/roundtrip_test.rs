/// Lossless numeric rendering: statement lines parsed back out of the
/// emitted program recover the original argument values and their order.
use kuka_krl::{CartesianPoint, GeneratorConfig, Smoothing, SrcGenerator};

/// Parses the ten values out of a `{X .., .., E4 ..}` aggregate line.
fn parse_pose(line: &str) -> Vec<f64> {
    let open = line.find('{').unwrap();
    let close = line.rfind('}').unwrap();
    line[open + 1..close]
        .split(", ")
        .map(|field| {
            let mut parts = field.split_whitespace();
            parts.next().unwrap(); // token name
            parts.next().unwrap().parse::<f64>().unwrap()
        })
        .collect()
}

#[test]
fn emitted_poses_parse_back_exactly() {
    let targets = [
        CartesianPoint {
            x: 1234.5678,
            y: -987.6543,
            z: 0.001,
            a: -179.99,
            b: 45.0,
            c: 0.25,
            e1: 1000.0001,
            ..CartesianPoint::default()
        },
        CartesianPoint {
            x: -0.5,
            e4: 360.0,
            ..CartesianPoint::default()
        },
        CartesianPoint::default(),
    ];

    let mut generator =
        SrcGenerator::from_writer("roundtrip", Vec::new(), GeneratorConfig::default()).unwrap();
    for p in targets {
        generator.lin_motion(p).unwrap();
    }
    let src = String::from_utf8(generator.close().unwrap()).unwrap();

    let lin_lines: Vec<&str> = src.lines().filter(|l| l.starts_with("LIN ")).collect();
    assert_eq!(lin_lines.len(), targets.len());

    for (line, p) in lin_lines.iter().zip(targets) {
        let values = parse_pose(line);
        let expected = [p.x, p.y, p.z, p.a, p.b, p.c, p.e1, p.e2, p.e3, p.e4];
        assert_eq!(values, expected, "lossy rendering in `{}`", line);
    }
}

#[test]
fn mixed_statement_sequence_preserves_values_and_order() {
    let mut generator =
        SrcGenerator::from_writer("mixed", Vec::new(), GeneratorConfig::default()).unwrap();
    generator.set_lin_smoothing(2.5).unwrap();
    generator
        .ptp_motion(
            CartesianPoint {
                z: 300.125,
                ..CartesianPoint::default()
            },
            Smoothing::CPtp,
        )
        .unwrap();
    generator.delay(0.25).unwrap();
    generator.set_analog_out(6, 7.125).unwrap();
    let src = String::from_utf8(generator.close().unwrap()).unwrap();

    // Find the statement region after the preamble's $ADVANCE line.
    let advance_at = src.find("$ADVANCE").unwrap();
    let body = &src[advance_at..];
    let statements: Vec<&str> = body
        .lines()
        .skip(1)
        .filter(|l| !l.is_empty() && *l != "END")
        .collect();

    assert_eq!(statements.len(), 4);
    assert_eq!(statements[0], "$APO.CDIS = 2.5");
    let values = parse_pose(statements[1]);
    assert_eq!(values[2], 300.125);
    assert!(statements[1].ends_with("C_PTP"));
    assert_eq!(statements[2], "WAIT SEC 0.25");
    assert_eq!(statements[3], "$ANOUT[6] = 7.125");
}
