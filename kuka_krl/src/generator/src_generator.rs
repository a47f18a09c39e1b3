use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::statements::*;
use crate::{CartesianPoint, Frame, JointPoint, KrlError, Smoothing, Statement};

use super::GeneratorConfig;

/// Writes one KUKA KRL source program to an exclusively owned sink.
///
/// Construction writes the fixed preamble (access header, `DEF` line,
/// initialization and start-position blocks, home motion, `$ADVANCE`);
/// every statement method appends exactly its fixed template in call
/// order; [`close`](SrcGenerator::close) writes the terminating `END` and
/// releases the sink. There is no buffering beyond the sink's own, no
/// reordering, and no validation of numeric ranges or identifiers -
/// malformed values pass through verbatim, by design.
///
/// After `close`, every call fails with [`KrlError::Closed`] and leaves
/// the emitted program untouched.
#[derive(Debug)]
pub struct SrcGenerator<W: Write> {
    name: String,
    config: GeneratorConfig,
    sink: Option<W>,
    statements_written: usize,
}

impl SrcGenerator<BufWriter<File>> {
    /// Creates `<directory>/<name>.src` and writes the program preamble.
    ///
    /// The name is rendered upper-cased as the program identifier; it is
    /// not sanitized and must already be a valid KRL identifier. Fails
    /// with [`KrlError::Io`] if the destination is not writable.
    pub fn create(
        name: &str,
        directory: impl AsRef<Path>,
        config: GeneratorConfig,
    ) -> Result<Self, KrlError> {
        let path = directory.as_ref().join(format!("{}.src", name));
        let file = File::create(&path)?;
        info!(program = name, path = %path.display(), "creating KRL source file");
        Self::from_writer(name, BufWriter::new(file), config)
    }
}

impl<W: Write> SrcGenerator<W> {
    /// Binds the generator to an arbitrary sink and writes the preamble.
    pub fn from_writer(name: &str, writer: W, config: GeneratorConfig) -> Result<Self, KrlError> {
        let mut generator = Self {
            name: name.to_string(),
            config,
            sink: Some(writer),
            statements_written: 0,
        };
        generator.write_preamble()?;
        Ok(generator)
    }

    fn write_preamble(&mut self) -> Result<(), KrlError> {
        let name = self.name.to_uppercase();
        let home = self.config.home_position;
        let advance_run = self.config.advance_run;
        let w = self.sink.as_mut().ok_or(KrlError::Closed)?;

        write!(w, "&ACCESS RVP\n")?;
        write!(w, "&REL 1\n")?;
        write!(w, "&PARAM TEMPLATE = C:\\KRC\\Roboter\\Template\\vorgabe\n")?;
        write!(w, "&PARAM EDITMASK = *\n")?;
        write!(w, "DEF {} ( )\n\n\n", name)?;

        write!(
            w,
            ";FOLD INI\n\
             ;FOLD BASISTECH INI\n\
             GLOBAL INTERRUPT DECL 3 WHEN $STOPMESS==TRUE DO IR_STOPM ( )\n\
             INTERRUPT ON 3\n\
             BAS (#INITMOV,0 )\n\
             ;ENDFOLD (BASISTECH INI)\n\
             ;ENDFOLD (INI)\n\n"
        )?;

        write!(
            w,
            ";FOLD STARTPOSITION - BASE IS 0, TOOL IS 0, SPEED IS 100%, POSITION IS externally defined -> se generating script\n\
             $BWDSTART = FALSE\n\
             PDAT_ACT = {{VEL 100,ACC 100,APO_DIST 50}}\n\
             FDAT_ACT = {{TOOL_NO 0,BASE_NO 0,IPO_FRAME #BASE}}\n\
             BAS (#PTP_PARAMS,100)\n"
        )?;
        write!(w, "PTP {}\n;ENDFOLD\n\n", home)?;

        write!(w, "$ADVANCE = {}\n\n", advance_run)?;
        Ok(())
    }

    /// Appends one statement to the program.
    ///
    /// The per-kind convenience methods all funnel through here; calling
    /// it directly with a prebuilt [`Statement`] is equivalent.
    pub fn write(&mut self, statement: Statement) -> Result<(), KrlError> {
        let w = self.sink.as_mut().ok_or(KrlError::Closed)?;
        write!(w, "{}", statement)?;
        self.statements_written += 1;
        debug!(
            keyword = statement.keyword(),
            count = self.statements_written,
            "appended statement"
        );
        Ok(())
    }

    /// `LIN` motion with continuous-path smoothing.
    pub fn lin_motion(&mut self, position: CartesianPoint) -> Result<(), KrlError> {
        self.write(Statement::LinMotion(LinMotion::new(position)))
    }

    /// `PTP` motion to a Cartesian target with the given smoothing mode.
    pub fn ptp_motion(
        &mut self,
        position: CartesianPoint,
        smoothing: Smoothing,
    ) -> Result<(), KrlError> {
        self.write(Statement::PtpMotion(PtpMotion::new(position, smoothing)))
    }

    /// `PTP` motion to a joint-space target, exact positioning.
    pub fn joint_motion(&mut self, position: JointPoint) -> Result<(), KrlError> {
        self.write(Statement::JointMotion(JointMotion::new(position)))
    }

    /// `SLIN` spline-linear motion with continuous-path smoothing.
    pub fn slin_motion(&mut self, position: CartesianPoint) -> Result<(), KrlError> {
        self.write(Statement::SlinMotion(SlinMotion::new(position)))
    }

    /// `SPTP` spline point-to-point motion with the given smoothing mode.
    pub fn sptp_motion(
        &mut self,
        position: CartesianPoint,
        smoothing: Smoothing,
    ) -> Result<(), KrlError> {
        self.write(Statement::SptpMotion(SptpMotion::new(position, smoothing)))
    }

    /// `SPLINE` .. `ENDSPLINE` block through the given points, in order.
    pub fn spline_motion(&mut self, points: Vec<CartesianPoint>) -> Result<(), KrlError> {
        self.write(Statement::SplineBlock(SplineBlock::new(points)))
    }

    /// Motion back to the construction-time home pose.
    pub fn home_motion(&mut self) -> Result<(), KrlError> {
        let home = self.config.home_position;
        self.write(Statement::HomeMotion(HomeMotion::new(home)))
    }

    /// Assigns `$BASE` by value.
    pub fn set_base_frame(&mut self, frame: Frame) -> Result<(), KrlError> {
        self.write(Statement::SetBaseFrame(SetBaseFrame::new(frame)))
    }

    /// Assigns `$TOOL` by value.
    pub fn set_tool_frame(&mut self, frame: Frame) -> Result<(), KrlError> {
        self.write(Statement::SetToolFrame(SetToolFrame::new(frame)))
    }

    /// Selects a controller-stored base frame by number.
    pub fn set_base_by_id(&mut self, base_number: u8) -> Result<(), KrlError> {
        self.write(Statement::SelectBase(SelectBase::new(base_number)))
    }

    /// Selects a controller-stored tool frame by number.
    pub fn set_tool_by_id(&mut self, tool_number: u8) -> Result<(), KrlError> {
        self.write(Statement::SelectTool(SelectTool::new(tool_number)))
    }

    /// Invokes the `Vorfraesen()` outline pre-milling pass.
    pub fn pre_milling(&mut self) -> Result<(), KrlError> {
        self.write(Statement::PreMilling(PreMilling::new()))
    }

    /// `WAIT SEC` delay.
    pub fn delay(&mut self, seconds: f64) -> Result<(), KrlError> {
        self.write(Statement::Delay(Delay::new(seconds)))
    }

    /// Assigns a digital output.
    pub fn set_digital_out(&mut self, port_number: u16, value: bool) -> Result<(), KrlError> {
        self.write(Statement::SetDigitalOut(SetDigitalOut::new(
            port_number,
            value,
        )))
    }

    /// Assigns an analog output.
    pub fn set_analog_out(&mut self, port_number: u16, value: f64) -> Result<(), KrlError> {
        self.write(Statement::SetAnalogOut(SetAnalogOut::new(
            port_number,
            value,
        )))
    }

    /// Sets the Cartesian path velocity (m/s).
    pub fn set_lin_speed(&mut self, speed: f64) -> Result<(), KrlError> {
        self.write(Statement::SetLinSpeed(SetLinSpeed::new(speed)))
    }

    /// Sets the joint velocity (percent of maximum).
    pub fn set_joint_speed(&mut self, speed: f64) -> Result<(), KrlError> {
        self.write(Statement::SetJointSpeed(SetJointSpeed::new(speed)))
    }

    /// Sets the continuous-path distance tolerance.
    pub fn set_lin_smoothing(&mut self, distance: f64) -> Result<(), KrlError> {
        self.write(Statement::SetLinSmoothing(SetLinSmoothing::new(distance)))
    }

    /// Sets the per-axis PTP approximation tolerances, one line per entry.
    pub fn set_joint_smoothing(&mut self, tolerances: Vec<f64>) -> Result<(), KrlError> {
        self.write(Statement::SetJointSmoothing(SetJointSmoothing::new(
            tolerances,
        )))
    }

    /// Generic BAS parameter assignment.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: f64) -> Result<(), KrlError> {
        self.write(Statement::SetParameter(SetParameter::new(name, value)))
    }

    /// Appends free-form KRL verbatim. See [`RawKrl`] for the caveats.
    pub fn write_raw(&mut self, content: impl Into<String>) -> Result<(), KrlError> {
        self.write(Statement::RawKrl(RawKrl::new(content)))
    }

    /// Writes the terminating `END`, flushes, and releases the sink.
    ///
    /// Returns the sink so file-backed callers can drop it (closing the
    /// file) and buffer-backed callers can inspect the emitted program.
    /// Exactly once: any later call on this generator, including a second
    /// `close`, fails with [`KrlError::Closed`].
    pub fn close(&mut self) -> Result<W, KrlError> {
        let mut w = self.sink.take().ok_or(KrlError::Closed)?;
        write!(w, "\nEND\n")?;
        w.flush()?;
        info!(
            program = %self.name,
            statements = self.statements_written,
            "finalized KRL source file"
        );
        Ok(w)
    }

    /// Program name as given at construction (not upper-cased).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of statements appended since construction. The preamble and
    /// footer do not count.
    pub fn statements_written(&self) -> usize {
        self.statements_written
    }
}
