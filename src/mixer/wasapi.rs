//! WASAPI implementation of the endpoint provider.
//!
//! Root handles (COM apartment, device enumerator, default render
//! endpoint, session manager) are acquired once in
//! [`WasapiEndpoint::new`] and live until process exit. Everything per
//! event — session enumerator, session control, volume interface — is
//! an owned reference-counted wrapper released on drop, on every exit
//! path.

use std::ffi::c_void;

use windows::core::{Interface, PWSTR};
use windows::Win32::Media::Audio::{
    eConsole, eRender, IAudioSessionControl2, IAudioSessionEnumerator, IAudioSessionManager2,
    IMMDevice, IMMDeviceEnumerator, ISimpleAudioVolume, MMDeviceEnumerator,
};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoTaskMemFree, CLSCTX_ALL, COINIT_APARTMENTTHREADED,
};

use super::{AudioEndpoint, AudioSession, MixerError, SessionIdentity};

impl MixerError {
    fn platform(call: &'static str, err: windows::core::Error) -> Self {
        MixerError::Platform {
            call,
            code: err.code().0,
            message: err.message(),
        }
    }
}

/// Default render endpoint and its session manager.
pub struct WasapiEndpoint {
    session_manager: IAudioSessionManager2,
    _device: IMMDevice,
    _enumerator: IMMDeviceEnumerator,
}

impl WasapiEndpoint {
    /// Acquire the root platform handles. Any failure here is fatal to
    /// the caller; there is nothing to control without them.
    pub fn new() -> Result<Self, MixerError> {
        unsafe {
            CoInitializeEx(None, COINIT_APARTMENTTHREADED)
                .ok()
                .map_err(|err| MixerError::platform("CoInitializeEx", err))?;
            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)
                    .map_err(|err| MixerError::platform("CoCreateInstance", err))?;
            let device = enumerator
                .GetDefaultAudioEndpoint(eRender, eConsole)
                .map_err(|err| MixerError::platform("GetDefaultAudioEndpoint", err))?;
            let session_manager: IAudioSessionManager2 = device
                .Activate(CLSCTX_ALL, None)
                .map_err(|err| MixerError::platform("IAudioSessionManager2::Activate", err))?;
            Ok(Self {
                session_manager,
                _device: device,
                _enumerator: enumerator,
            })
        }
    }

    /// Fresh session enumerator; the session set changes between events.
    fn session_enumerator(&self) -> Result<IAudioSessionEnumerator, MixerError> {
        unsafe { self.session_manager.GetSessionEnumerator() }
            .map_err(|err| MixerError::platform("GetSessionEnumerator", err))
    }
}

impl AudioEndpoint for WasapiEndpoint {
    fn session_count(&self) -> Result<usize, MixerError> {
        let sessions = self.session_enumerator()?;
        let count =
            unsafe { sessions.GetCount() }.map_err(|err| MixerError::platform("GetCount", err))?;
        Ok(count.max(0) as usize)
    }

    fn session(&self, index: usize) -> Result<Box<dyn AudioSession + '_>, MixerError> {
        let sessions = self.session_enumerator()?;
        let count =
            unsafe { sessions.GetCount() }.map_err(|err| MixerError::platform("GetCount", err))?;
        if index >= count.max(0) as usize {
            return Err(MixerError::NotFound(index));
        }
        let control = unsafe { sessions.GetSession(index as i32) }
            .map_err(|err| MixerError::platform("GetSession", err))?;
        let control: IAudioSessionControl2 = control
            .cast()
            .map_err(|err| MixerError::platform("IAudioSessionControl2 query", err))?;
        let volume: ISimpleAudioVolume = control
            .cast()
            .map_err(|err| MixerError::platform("ISimpleAudioVolume query", err))?;
        Ok(Box::new(WasapiSession { control, volume }))
    }
}

/// Interface pair for one session; dropping releases both references.
struct WasapiSession {
    control: IAudioSessionControl2,
    volume: ISimpleAudioVolume,
}

impl AudioSession for WasapiSession {
    fn identity(&self) -> Result<SessionIdentity, MixerError> {
        // A session that cannot report identity still gets listed, so
        // failed queries become absent fields rather than errors.
        unsafe {
            let identifier = self
                .control
                .GetSessionIdentifier()
                .ok()
                .and_then(|ptr| take_com_string(ptr));
            let display_name = self
                .control
                .GetDisplayName()
                .ok()
                .and_then(|ptr| take_com_string(ptr));
            Ok(SessionIdentity {
                identifier,
                display_name,
            })
        }
    }

    fn volume(&self) -> Result<f32, MixerError> {
        unsafe { self.volume.GetMasterVolume() }
            .map_err(|err| MixerError::platform("GetMasterVolume", err))
    }

    fn set_volume(&self, level: f32) -> Result<(), MixerError> {
        unsafe { self.volume.SetMasterVolume(level, std::ptr::null()) }
            .map_err(|err| MixerError::platform("SetMasterVolume", err))
    }
}

/// Convert a COM-allocated wide string and free it, mapping empty
/// strings to `None`.
unsafe fn take_com_string(ptr: PWSTR) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let text = ptr.to_string().ok();
    CoTaskMemFree(Some(ptr.0 as *const c_void));
    text.filter(|value| !value.is_empty())
}
