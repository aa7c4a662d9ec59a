use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::models::Champion;

/// Champion roster sorted by id, with each champion's representative color.
pub static CHAMPIONS: [Champion; 172] = [
    Champion { id: "Aatrox", name: "Aatrox", color: "#ff4444" },
    Champion { id: "Ahri", name: "Ahri", color: "#ff69b4" },
    Champion { id: "Akali", name: "Akali", color: "#00ff88" },
    Champion { id: "Akshan", name: "Akshan", color: "#ffaa44" },
    Champion { id: "Alistar", name: "Alistar", color: "#9966ff" },
    Champion { id: "Ambessa", name: "Ambessa", color: "#c9a227" },
    Champion { id: "Amumu", name: "Amumu", color: "#44ff88" },
    Champion { id: "Anivia", name: "Anivia", color: "#00ddff" },
    Champion { id: "Annie", name: "Annie", color: "#ff6644" },
    Champion { id: "Aphelios", name: "Aphelios", color: "#4466ff" },
    Champion { id: "Ashe", name: "Ashe", color: "#66ccff" },
    Champion { id: "AurelionSol", name: "Aurelion Sol", color: "#8855ff" },
    Champion { id: "Aurora", name: "Aurora", color: "#ff88ff" },
    Champion { id: "Azir", name: "Azir", color: "#ffcc44" },
    Champion { id: "Bard", name: "Bard", color: "#ffdd77" },
    Champion { id: "Belveth", name: "Bel'Veth", color: "#cc44ff" },
    Champion { id: "Blitzcrank", name: "Blitzcrank", color: "#ffaa00" },
    Champion { id: "Brand", name: "Brand", color: "#ff5500" },
    Champion { id: "Braum", name: "Braum", color: "#4488ff" },
    Champion { id: "Briar", name: "Briar", color: "#ff3366" },
    Champion { id: "Caitlyn", name: "Caitlyn", color: "#6666ff" },
    Champion { id: "Camille", name: "Camille", color: "#00ccff" },
    Champion { id: "Cassiopeia", name: "Cassiopeia", color: "#44ff44" },
    Champion { id: "Chogath", name: "Cho'Gath", color: "#9944ff" },
    Champion { id: "Corki", name: "Corki", color: "#ff8844" },
    Champion { id: "Darius", name: "Darius", color: "#cc2222" },
    Champion { id: "Diana", name: "Diana", color: "#6688ff" },
    Champion { id: "Draven", name: "Draven", color: "#ff6644" },
    Champion { id: "DrMundo", name: "Dr. Mundo", color: "#9966ff" },
    Champion { id: "Ekko", name: "Ekko", color: "#00ffcc" },
    Champion { id: "Elise", name: "Elise", color: "#ff44aa" },
    Champion { id: "Evelynn", name: "Evelynn", color: "#ff44ff" },
    Champion { id: "Ezreal", name: "Ezreal", color: "#ffcc44" },
    Champion { id: "Fiddlesticks", name: "Fiddlesticks", color: "#44aa44" },
    Champion { id: "Fiora", name: "Fiora", color: "#ff6688" },
    Champion { id: "Fizz", name: "Fizz", color: "#44ddff" },
    Champion { id: "Galio", name: "Galio", color: "#6688cc" },
    Champion { id: "Gangplank", name: "Gangplank", color: "#ff8844" },
    Champion { id: "Garen", name: "Garen", color: "#4466ff" },
    Champion { id: "Gnar", name: "Gnar", color: "#ff8844" },
    Champion { id: "Gragas", name: "Gragas", color: "#cc6644" },
    Champion { id: "Graves", name: "Graves", color: "#886644" },
    Champion { id: "Gwen", name: "Gwen", color: "#88ccff" },
    Champion { id: "Hecarim", name: "Hecarim", color: "#44ffaa" },
    Champion { id: "Heimerdinger", name: "Heimerdinger", color: "#ffcc44" },
    Champion { id: "Hwei", name: "Hwei", color: "#ff8866" },
    Champion { id: "Illaoi", name: "Illaoi", color: "#44cc88" },
    Champion { id: "Irelia", name: "Irelia", color: "#ff66aa" },
    Champion { id: "Ivern", name: "Ivern", color: "#44aa44" },
    Champion { id: "Janna", name: "Janna", color: "#aaccff" },
    Champion { id: "JarvanIV", name: "Jarvan IV", color: "#ffcc44" },
    Champion { id: "Jax", name: "Jax", color: "#9966ff" },
    Champion { id: "Jayce", name: "Jayce", color: "#ffcc44" },
    Champion { id: "Jhin", name: "Jhin", color: "#cc4466" },
    Champion { id: "Jinx", name: "Jinx", color: "#ff66aa" },
    Champion { id: "Kaisa", name: "Kai'Sa", color: "#cc44ff" },
    Champion { id: "Kalista", name: "Kalista", color: "#44ffcc" },
    Champion { id: "Karma", name: "Karma", color: "#44ccaa" },
    Champion { id: "Karthus", name: "Karthus", color: "#44ff88" },
    Champion { id: "Kassadin", name: "Kassadin", color: "#6644ff" },
    Champion { id: "Katarina", name: "Katarina", color: "#ff4466" },
    Champion { id: "Kayle", name: "Kayle", color: "#ffcc44" },
    Champion { id: "Kayn", name: "Kayn", color: "#ff4466" },
    Champion { id: "Kennen", name: "Kennen", color: "#9944ff" },
    Champion { id: "Khazix", name: "Kha'Zix", color: "#9944ff" },
    Champion { id: "Kindred", name: "Kindred", color: "#6688ff" },
    Champion { id: "Kled", name: "Kled", color: "#ff6644" },
    Champion { id: "KogMaw", name: "Kog'Maw", color: "#88cc44" },
    Champion { id: "KSante", name: "K'Sante", color: "#ffaa44" },
    Champion { id: "Leblanc", name: "LeBlanc", color: "#cc66ff" },
    Champion { id: "LeeSin", name: "Lee Sin", color: "#ff8844" },
    Champion { id: "Leona", name: "Leona", color: "#ffcc44" },
    Champion { id: "Lillia", name: "Lillia", color: "#ff88cc" },
    Champion { id: "Lissandra", name: "Lissandra", color: "#4466ff" },
    Champion { id: "Lucian", name: "Lucian", color: "#ffcc88" },
    Champion { id: "Lulu", name: "Lulu", color: "#cc88ff" },
    Champion { id: "Lux", name: "Lux", color: "#ffee88" },
    Champion { id: "Malphite", name: "Malphite", color: "#668899" },
    Champion { id: "Malzahar", name: "Malzahar", color: "#9944ff" },
    Champion { id: "Maokai", name: "Maokai", color: "#448844" },
    Champion { id: "MasterYi", name: "Master Yi", color: "#6699ff" },
    Champion { id: "Mel", name: "Mel", color: "#d4af37" },
    Champion { id: "Milio", name: "Milio", color: "#ff8844" },
    Champion { id: "MissFortune", name: "Miss Fortune", color: "#ff4466" },
    Champion { id: "MonkeyKing", name: "Wukong", color: "#ff9944" },
    Champion { id: "Mordekaiser", name: "Mordekaiser", color: "#44cc88" },
    Champion { id: "Morgana", name: "Morgana", color: "#9944cc" },
    Champion { id: "Naafiri", name: "Naafiri", color: "#cc6644" },
    Champion { id: "Nami", name: "Nami", color: "#44ccff" },
    Champion { id: "Nasus", name: "Nasus", color: "#ccaa44" },
    Champion { id: "Nautilus", name: "Nautilus", color: "#cc8844" },
    Champion { id: "Neeko", name: "Neeko", color: "#ff88cc" },
    Champion { id: "Nidalee", name: "Nidalee", color: "#88aa44" },
    Champion { id: "Nilah", name: "Nilah", color: "#44aaff" },
    Champion { id: "Nocturne", name: "Nocturne", color: "#4466aa" },
    Champion { id: "Nunu", name: "Nunu & Willump", color: "#4488ff" },
    Champion { id: "Olaf", name: "Olaf", color: "#ff8844" },
    Champion { id: "Orianna", name: "Orianna", color: "#ffcc88" },
    Champion { id: "Ornn", name: "Ornn", color: "#ff6644" },
    Champion { id: "Pantheon", name: "Pantheon", color: "#ffcc44" },
    Champion { id: "Poppy", name: "Poppy", color: "#4488ff" },
    Champion { id: "Pyke", name: "Pyke", color: "#44aa88" },
    Champion { id: "Qiyana", name: "Qiyana", color: "#ffaa44" },
    Champion { id: "Quinn", name: "Quinn", color: "#8866cc" },
    Champion { id: "Rakan", name: "Rakan", color: "#ff88cc" },
    Champion { id: "Rammus", name: "Rammus", color: "#ffcc44" },
    Champion { id: "RekSai", name: "Rek'Sai", color: "#cc66aa" },
    Champion { id: "Rell", name: "Rell", color: "#ff8844" },
    Champion { id: "Renata", name: "Renata Glasc", color: "#44cc88" },
    Champion { id: "Renekton", name: "Renekton", color: "#44aa44" },
    Champion { id: "Rengar", name: "Rengar", color: "#888844" },
    Champion { id: "Riven", name: "Riven", color: "#44cc88" },
    Champion { id: "Rumble", name: "Rumble", color: "#ff6644" },
    Champion { id: "Ryze", name: "Ryze", color: "#4466ff" },
    Champion { id: "Samira", name: "Samira", color: "#ff4466" },
    Champion { id: "Sejuani", name: "Sejuani", color: "#4488aa" },
    Champion { id: "Senna", name: "Senna", color: "#44aa88" },
    Champion { id: "Seraphine", name: "Seraphine", color: "#ff88cc" },
    Champion { id: "Sett", name: "Sett", color: "#ff6644" },
    Champion { id: "Shaco", name: "Shaco", color: "#ff8844" },
    Champion { id: "Shen", name: "Shen", color: "#4466aa" },
    Champion { id: "Shyvana", name: "Shyvana", color: "#ff4466" },
    Champion { id: "Singed", name: "Singed", color: "#44aa44" },
    Champion { id: "Sion", name: "Sion", color: "#884444" },
    Champion { id: "Sivir", name: "Sivir", color: "#ffaa44" },
    Champion { id: "Skarner", name: "Skarner", color: "#9966cc" },
    Champion { id: "Smolder", name: "Smolder", color: "#ff8844" },
    Champion { id: "Sona", name: "Sona", color: "#4488ff" },
    Champion { id: "Soraka", name: "Soraka", color: "#ffcc88" },
    Champion { id: "Swain", name: "Swain", color: "#cc4444" },
    Champion { id: "Sylas", name: "Sylas", color: "#4488cc" },
    Champion { id: "Syndra", name: "Syndra", color: "#9944ff" },
    Champion { id: "TahmKench", name: "Tahm Kench", color: "#448866" },
    Champion { id: "Taliyah", name: "Taliyah", color: "#cc8866" },
    Champion { id: "Talon", name: "Talon", color: "#886688" },
    Champion { id: "Taric", name: "Taric", color: "#88aacc" },
    Champion { id: "Teemo", name: "Teemo", color: "#ffaa44" },
    Champion { id: "Thresh", name: "Thresh", color: "#44cc88" },
    Champion { id: "Tristana", name: "Tristana", color: "#cc88ff" },
    Champion { id: "Trundle", name: "Trundle", color: "#4488aa" },
    Champion { id: "Tryndamere", name: "Tryndamere", color: "#ff4466" },
    Champion { id: "TwistedFate", name: "Twisted Fate", color: "#ffcc44" },
    Champion { id: "Twitch", name: "Twitch", color: "#44aa44" },
    Champion { id: "Udyr", name: "Udyr", color: "#cc8844" },
    Champion { id: "Urgot", name: "Urgot", color: "#448844" },
    Champion { id: "Varus", name: "Varus", color: "#cc44aa" },
    Champion { id: "Vayne", name: "Vayne", color: "#cc4466" },
    Champion { id: "Veigar", name: "Veigar", color: "#9944ff" },
    Champion { id: "Velkoz", name: "Vel'Koz", color: "#cc66ff" },
    Champion { id: "Vex", name: "Vex", color: "#888899" },
    Champion { id: "Vi", name: "Vi", color: "#ff66aa" },
    Champion { id: "Viego", name: "Viego", color: "#44ccaa" },
    Champion { id: "Viktor", name: "Viktor", color: "#ffcc44" },
    Champion { id: "Vladimir", name: "Vladimir", color: "#cc2244" },
    Champion { id: "Volibear", name: "Volibear", color: "#4488cc" },
    Champion { id: "Warwick", name: "Warwick", color: "#448866" },
    Champion { id: "Xayah", name: "Xayah", color: "#ff4488" },
    Champion { id: "Xerath", name: "Xerath", color: "#4488ff" },
    Champion { id: "XinZhao", name: "Xin Zhao", color: "#ffaa44" },
    Champion { id: "Yasuo", name: "Yasuo", color: "#44ccff" },
    Champion { id: "Yone", name: "Yone", color: "#ff4466" },
    Champion { id: "Yorick", name: "Yorick", color: "#44aa66" },
    Champion { id: "Yunara", name: "Yunara", color: "#88ddff" },
    Champion { id: "Yuumi", name: "Yuumi", color: "#ff88ff" },
    Champion { id: "Zaahen", name: "Zaahen", color: "#cc66ff" },
    Champion { id: "Zac", name: "Zac", color: "#66ff44" },
    Champion { id: "Zed", name: "Zed", color: "#ff4466" },
    Champion { id: "Zeri", name: "Zeri", color: "#44ffcc" },
    Champion { id: "Ziggs", name: "Ziggs", color: "#ffaa44" },
    Champion { id: "Zilean", name: "Zilean", color: "#ffcc88" },
    Champion { id: "Zoe", name: "Zoe", color: "#ff88cc" },
    Champion { id: "Zyra", name: "Zyra", color: "#ff4466" },
];

lazy_static! {
    static ref BY_ID: HashMap<&'static str, &'static Champion> =
        CHAMPIONS.iter().map(|champion| (champion.id, champion)).collect();
}

pub fn find_champion(id: &str) -> Option<&'static Champion> {
    BY_ID.get(id).copied()
}

pub fn champion_index(id: &str) -> Option<usize> {
    CHAMPIONS.iter().position(|champion| champion.id == id)
}
