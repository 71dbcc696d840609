// ABOUTME: Compiled-in runtime list and the commented template for new user configs.
// ABOUTME: Both use the same "<platform> <name> <path>" line format.

/// Well-known install locations, consulted after the user's list.
pub const DEFAULT_RUNTIMES: &str = r"# Built-in runtime locations. Entries here are consulted after the
# user's runtime list; the first present entry for a name wins.
windows WMR C:\WINDOWS\system32\MixedRealityRuntime.json
windows Oculus C:\Program Files\Oculus\Support\oculus-runtime\oculus_openxr_64.json
windows SteamVR C:\Program Files (x86)\Steam\steamapps\common\SteamVR\steamxr_win64.json
windows Varjo C:\Program Files\Varjo\varjo-openxr\VarjoOpenXR.json
windows ViveOpenXR C:\Program Files (x86)\VIVE\Updater\App\ViveVRRuntime\ViveVR_openxr\ViveOpenXR.json
windows VirtualDesktopXRBundled C:\Program Files\Virtual Desktop Streamer\OpenXR\virtualdesktop-openxr-32.json
windows VirtualDesktopXRStandalone C:\Program Files\VirtualDesktopXR\virtualdesktop-openxr-32.json
linux Monado /usr/share/openxr/1/openxr_monado.json
linux SteamVR ~/.steam/steam/steamapps/common/SteamVR/steamxr_linux64.json
";

/// Written to the user config path when it does not exist yet.
pub const TEMPLATE: &str = r"# xrruntime runtime list
#
# Entries in this file are checked before the built-in list. When
# several entries share a name, the first one whose manifest exists
# is used. On Linux a leading '~' expands to the invoking user's home
# directory (the sudo caller's, when run under sudo).
#
# Format, one runtime per line:
# <windows|linux> <name without spaces> <path to runtime manifest, spaces allowed>
#
# Examples (both are already part of the built-in list):
# windows SteamVR C:\Program Files (x86)\Steam\steamapps\common\SteamVR\steamxr_win64.json
# linux SteamVR ~/.steam/steam/steamapps/common/SteamVR/steamxr_linux64.json
";
