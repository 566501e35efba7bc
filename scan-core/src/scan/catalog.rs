//! Threat Catalog
//!
//! Fixed tables the generator draws from. The tables are part of the
//! observable contract: reordering or editing an entry remaps the findings
//! of every fingerprint, so treat the data here the same way as the rng
//! constants.

use super::types::{Severity, ThreatCategory};

/// Placeholder token in name templates, replaced with a 5-digit id
pub const ID_TOKEN: &str = "{id}";

/// One row of the fixed threat table
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Display name with an `{id}` placeholder at the end
    pub name_template: &'static str,
    pub category: ThreatCategory,
    pub severity: Severity,
    /// Candidate directories, each ending in a separator so a filename can
    /// be appended directly
    pub locations: &'static [&'static str],
}

// ============================================================================
// LOCATION POOLS
// ============================================================================

const SYSTEM_DIRS: &[&str] = &[
    "C:\\Windows\\System32\\",
    "C:\\Windows\\SysWOW64\\",
    "C:\\Windows\\System32\\drivers\\",
];

const TEMP_DIRS: &[&str] = &[
    "C:\\Windows\\Temp\\",
    "C:\\Users\\Default\\AppData\\Local\\Temp\\",
    "%TEMP%\\",
];

const APPDATA_DIRS: &[&str] = &[
    "%APPDATA%\\Roaming\\",
    "%APPDATA%\\Local\\Programs\\",
    "%LOCALAPPDATA%\\",
];

const DOWNLOAD_DIRS: &[&str] = &[
    "C:\\Users\\Public\\Downloads\\",
    "C:\\Users\\Public\\Documents\\",
];

const PROGRAM_DIRS: &[&str] = &[
    "C:\\Program Files (x86)\\Common Files\\",
    "C:\\ProgramData\\",
];

const STARTUP_DIRS: &[&str] = &[
    "%APPDATA%\\Microsoft\\Windows\\Start Menu\\Programs\\Startup\\",
    "HKCU\\Software\\Microsoft\\Windows\\CurrentVersion\\Run\\",
];

const REGISTRY_KEYS: &[&str] = &[
    "HKLM\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Run\\",
    "HKCU\\Software\\Microsoft\\Windows\\CurrentVersion\\RunOnce\\",
];

const BROWSER_DIRS: &[&str] = &[
    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Extensions\\",
    "%APPDATA%\\Mozilla\\Firefox\\Profiles\\default\\extensions\\",
    "%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default\\",
];

// ============================================================================
// FILENAME TABLE
// ============================================================================

/// Fixed filename table; one entry is appended to the chosen location
pub const FILE_NAMES: &[&str] = &[
    "svchost_.exe",
    "winsrv32.dll",
    "system_update.exe",
    "msdefender.db",
    "netcfg.dll",
    "runtime_broker.exe",
    "audiodrv.sys",
    "update_helper.exe",
    "browser_ext.js",
    "toolbar.dll",
    "searchhelper.dll",
    "adview.dll",
    "tracker.dat",
    "cookies.sqlite",
    "telemetry.log",
    "miner_svc.exe",
    "gpu_worker.exe",
    "keymap.sys",
    "inputhook.dll",
    "backup_sync.exe",
    "flash_player.exe",
    "codec_pack.exe",
    "invoice_2024.pdf.exe",
    "setup_crack.exe",
];

// ============================================================================
// THREAT TABLE (100 entries)
// ============================================================================

use Severity::{Critical, High, Low, Medium};
use ThreatCategory::*;

/// The fixed threat template table. Index order matters.
#[rustfmt::skip]
pub const CATALOG: &[CatalogEntry] = &[
    // Trojans
    CatalogEntry { name_template: "Trojan.GenericKD.{id}", category: Trojan, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Trojan.Win32.Agent.{id}", category: Trojan, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Trojan.Downloader.VB.{id}", category: Trojan, severity: High, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Trojan.Dropper.MSIL.{id}", category: Trojan, severity: High, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Trojan.Injector.{id}", category: Trojan, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Trojan.Banker.Chepro.{id}", category: Trojan, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Trojan.FakeAV.{id}", category: Trojan, severity: High, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "Trojan.Win64.Rozena.{id}", category: Trojan, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Trojan.Script.Heur.{id}", category: Trojan, severity: Medium, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Trojan.Proxy.Glupteba.{id}", category: Trojan, severity: High, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "Trojan.PSW.Stealer.{id}", category: Trojan, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Trojan.Clicker.Agent.{id}", category: Trojan, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Trojan.Spy.Ursnif.{id}", category: Trojan, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Trojan.Heur.Generic.{id}", category: Trojan, severity: High, locations: DOWNLOAD_DIRS },
    // Ransomware
    CatalogEntry { name_template: "Ransom.Win32.Crysis.{id}", category: Ransomware, severity: Critical, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "Ransom.StopDjvu.{id}", category: Ransomware, severity: Critical, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "Ransom.LockBit.Gen{id}", category: Ransomware, severity: Critical, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Ransom.Phobos.{id}", category: Ransomware, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Ransom.Win32.GandCrab.{id}", category: Ransomware, severity: Critical, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Ransom.Conti.Variant{id}", category: Ransomware, severity: Critical, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "Ransom.Hive.{id}", category: Ransomware, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Ransom.FileCoder.{id}", category: Ransomware, severity: Critical, locations: DOWNLOAD_DIRS },
    // Spyware
    CatalogEntry { name_template: "Spyware.Agent.{id}", category: Spyware, severity: High, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Spyware.PasswordStealer.{id}", category: Spyware, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Spyware.InfoStealer.Redline.{id}", category: Spyware, severity: Critical, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Spyware.FormGrabber.{id}", category: Spyware, severity: High, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Spyware.ScreenLogger.{id}", category: Spyware, severity: High, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Spyware.Azorult.{id}", category: Spyware, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Spyware.Win32.Zbot.{id}", category: Spyware, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Spyware.BrowserSpy.{id}", category: Spyware, severity: High, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Spyware.Vidar.{id}", category: Spyware, severity: High, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Spyware.ClipBanker.{id}", category: Spyware, severity: High, locations: APPDATA_DIRS },
    // Keyloggers
    CatalogEntry { name_template: "Keylogger.Win32.Agent.{id}", category: Keylogger, severity: High, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Keylogger.Snake.{id}", category: Keylogger, severity: High, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Keylogger.AgentTesla.{id}", category: Keylogger, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Keylogger.HawkEye.{id}", category: Keylogger, severity: High, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Keylogger.Phoenix.{id}", category: Keylogger, severity: High, locations: STARTUP_DIRS },
    CatalogEntry { name_template: "Keylogger.MassLogger.{id}", category: Keylogger, severity: High, locations: APPDATA_DIRS },
    // Adware
    CatalogEntry { name_template: "Adware.BrowserAssistant.{id}", category: Adware, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Adware.Bundlore.{id}", category: Adware, severity: Low, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "Adware.Gen.{id}", category: Adware, severity: Low, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "Adware.InstallCore.{id}", category: Adware, severity: Medium, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "Adware.OpenCandy.{id}", category: Adware, severity: Low, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Adware.Win32.Amonetize.{id}", category: Adware, severity: Medium, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "Adware.DealPly.{id}", category: Adware, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Adware.SearchSuite.{id}", category: Adware, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Adware.Popunder.{id}", category: Adware, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Adware.OfferWall.{id}", category: Adware, severity: Low, locations: APPDATA_DIRS },
    // Rootkits
    CatalogEntry { name_template: "Rootkit.Win32.TDSS.{id}", category: Rootkit, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Rootkit.Agent.{id}", category: Rootkit, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Rootkit.ZeroAccess.{id}", category: Rootkit, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Rootkit.Necurs.{id}", category: Rootkit, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Rootkit.Bootkit.Pihar.{id}", category: Rootkit, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Rootkit.Kernel.Hide.{id}", category: Rootkit, severity: Critical, locations: SYSTEM_DIRS },
    // Worms
    CatalogEntry { name_template: "Worm.Win32.AutoRun.{id}", category: Worm, severity: High, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "Worm.VBS.Jenxcus.{id}", category: Worm, severity: High, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Worm.Mydoom.{id}", category: Worm, severity: Medium, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Worm.Phorpiex.{id}", category: Worm, severity: High, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Worm.Script.Generic.{id}", category: Worm, severity: Medium, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Worm.USB.Dunihi.{id}", category: Worm, severity: High, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "Worm.MSIL.Bladabindi.{id}", category: Worm, severity: High, locations: APPDATA_DIRS },
    // Botnet clients
    CatalogEntry { name_template: "Botnet.Andromeda.{id}", category: Botnet, severity: High, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Botnet.Emotet.Loader.{id}", category: Botnet, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Botnet.Qakbot.{id}", category: Botnet, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Botnet.TrickBot.Module.{id}", category: Botnet, severity: Critical, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "Botnet.Mirai.Win32.{id}", category: Botnet, severity: High, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Botnet.DDoS.Nitol.{id}", category: Botnet, severity: High, locations: SYSTEM_DIRS },
    // Cryptominers
    CatalogEntry { name_template: "CoinMiner.XMRig.{id}", category: Cryptominer, severity: High, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "CoinMiner.Win64.Tofsee.{id}", category: Cryptominer, severity: High, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "CoinMiner.JS.CoinHive.{id}", category: Cryptominer, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "CoinMiner.Hidden.{id}", category: Cryptominer, severity: High, locations: TEMP_DIRS },
    CatalogEntry { name_template: "CoinMiner.GPU.Claymore.{id}", category: Cryptominer, severity: Medium, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "CoinMiner.LemonDuck.{id}", category: Cryptominer, severity: High, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "CoinMiner.PowerShell.{id}", category: Cryptominer, severity: Medium, locations: TEMP_DIRS },
    // Backdoors
    CatalogEntry { name_template: "Backdoor.Win32.Bifrose.{id}", category: Backdoor, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Backdoor.RemoteAdmin.{id}", category: Backdoor, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Backdoor.NjRat.{id}", category: Backdoor, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Backdoor.AsyncRAT.{id}", category: Backdoor, severity: Critical, locations: APPDATA_DIRS },
    CatalogEntry { name_template: "Backdoor.Gh0st.{id}", category: Backdoor, severity: Critical, locations: SYSTEM_DIRS },
    CatalogEntry { name_template: "Backdoor.Shell.Metasploit.{id}", category: Backdoor, severity: Critical, locations: TEMP_DIRS },
    CatalogEntry { name_template: "Backdoor.DarkComet.{id}", category: Backdoor, severity: Critical, locations: PROGRAM_DIRS },
    // Browser hijackers
    CatalogEntry { name_template: "Hijacker.StartPage.{id}", category: BrowserHijacker, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Hijacker.SearchRedirect.{id}", category: BrowserHijacker, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Hijacker.NewTab.{id}", category: BrowserHijacker, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Hijacker.Homepage.Qone8.{id}", category: BrowserHijacker, severity: Medium, locations: REGISTRY_KEYS },
    CatalogEntry { name_template: "Hijacker.Conduit.{id}", category: BrowserHijacker, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Hijacker.DNSChanger.{id}", category: BrowserHijacker, severity: High, locations: REGISTRY_KEYS },
    CatalogEntry { name_template: "Hijacker.ProxyOverride.{id}", category: BrowserHijacker, severity: High, locations: REGISTRY_KEYS },
    // Trackers
    CatalogEntry { name_template: "Tracker.SuperCookie.{id}", category: Tracker, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Tracker.Fingerprint.{id}", category: Tracker, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Tracker.AdBeacon.{id}", category: Tracker, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Tracker.CrossSite.{id}", category: Tracker, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Tracker.SessionReplay.{id}", category: Tracker, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Tracker.LocationHarvest.{id}", category: Tracker, severity: Medium, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "Tracker.AudioBeacon.{id}", category: Tracker, severity: Low, locations: BROWSER_DIRS },
    // Potentially unwanted programs
    CatalogEntry { name_template: "PUP.Optional.Toolbar.{id}", category: Pup, severity: Low, locations: BROWSER_DIRS },
    CatalogEntry { name_template: "PUP.RegistryCleaner.{id}", category: Pup, severity: Low, locations: PROGRAM_DIRS },
    CatalogEntry { name_template: "PUP.DriverUpdater.{id}", category: Pup, severity: Low, locations: DOWNLOAD_DIRS },
    CatalogEntry { name_template: "PUP.SystemOptimizer.{id}", category: Pup, severity: Low, locations: STARTUP_DIRS },
    CatalogEntry { name_template: "PUP.FakeCodec.{id}", category: Pup, severity: Medium, locations: DOWNLOAD_DIRS },
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_is_pinned() {
        // The table length feeds the index draws; growing or shrinking it
        // remaps every stored record.
        assert_eq!(CATALOG.len(), 100);
    }

    #[test]
    fn test_every_entry_has_locations_and_id_token() {
        for entry in CATALOG {
            assert!(
                !entry.locations.is_empty(),
                "{} has no candidate locations",
                entry.name_template
            );
            assert!(
                entry.name_template.ends_with(ID_TOKEN),
                "{} is missing the id token",
                entry.name_template
            );
        }
    }

    #[test]
    fn test_name_templates_are_unique() {
        let templates: HashSet<&str> = CATALOG.iter().map(|e| e.name_template).collect();
        assert_eq!(templates.len(), CATALOG.len());
    }

    #[test]
    fn test_locations_end_with_separator() {
        for entry in CATALOG {
            for location in entry.locations {
                assert!(
                    location.ends_with('\\'),
                    "{} cannot take a filename suffix",
                    location
                );
            }
        }
    }

    #[test]
    fn test_filename_table_not_empty() {
        assert!(!FILE_NAMES.is_empty());
        for name in FILE_NAMES {
            assert!(name.contains('.'), "{} has no extension", name);
        }
    }
}
